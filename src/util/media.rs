//! OS color-scheme preference via the `prefers-color-scheme` media query.
//!
//! `MediaQueryScheme` reads the live value; [`subscribe`] registers a
//! change listener. The listener is intentionally leaked: the page lifetime
//! bounds the subscription, so there is no unsubscribe path.

use crate::state::resolver::SystemScheme;
use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`SystemScheme`] over `window.matchMedia`.
///
/// When the query is unavailable (ancient browser, no window) the system
/// is treated as preferring light, matching the undecorated default.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryScheme;

impl SystemScheme for MediaQueryScheme {
    fn current(&self) -> Theme {
        if prefers_dark() { Theme::Dark } else { Theme::Light }
    }
}

/// Whether the OS currently prefers a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Register `on_change` to run with the new preference whenever the OS
/// color scheme changes. Lives for the rest of the page; silently does
/// nothing when the media query is unavailable.
#[cfg(feature = "csr")]
pub fn subscribe(on_change: impl Fn(Theme) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            let theme = if event.matches() { Theme::Dark } else { Theme::Light };
            on_change(theme);
        },
    );
    let _ = mq.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    // Page-lifetime subscription; dropping the closure would detach it.
    listener.forget();
}
