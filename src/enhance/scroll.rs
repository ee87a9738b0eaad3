//! Scroll-linked page furniture: back-to-top button and reading progress.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll depth past which the back-to-top button becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Fraction of the content scrolled past, in whole percent steps,
/// clamped to `0.0..=1.0`. Content shorter than the viewport reads as
/// fully scrolled once any scrolling happens at all.
pub fn progress_fraction(
    scroll_y: f64,
    content_top: f64,
    content_height: f64,
    viewport_height: f64,
) -> f64 {
    let max = (content_height - viewport_height).max(1.0);
    let scrolled = (scroll_y - content_top).clamp(0.0, max);
    (scrolled / max * 100.0).round() / 100.0
}

/// Append the `#backToTop` button and keep its visibility in sync with
/// the scroll position. Clicking scrolls smoothly back to the top.
#[cfg(feature = "csr")]
pub fn install_back_to_top() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(body) = document.body() else { return };

    let Some(button) = document
        .create_element("button")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    button.set_id("backToTop");
    button.set_title("Back to top");
    button.set_inner_html("\u{25b2}");
    if body.append_child(&button).is_err() {
        return;
    }

    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Some(w) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&options);
        }
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let sync = move || {
        if let Some(w) = web_sys::window() {
            let y = w.scroll_y().unwrap_or(0.0);
            let opacity = if back_to_top_visible(y) { "1" } else { "0" };
            let _ = button.style().set_property("opacity", opacity);
        }
    };
    sync();
    attach_passive_scroll(&document, sync);
}

/// Append the `#readingProgress` bar and keep its `scaleX` transform in
/// sync with how far through `.page__content` the reader is.
#[cfg(feature = "csr")]
pub fn install_reading_progress() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(body) = document.body() else { return };

    let Some(bar) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    bar.set_id("readingProgress");
    if body.append_child(&bar).is_err() {
        return;
    }

    let content: web_sys::Element = document
        .query_selector(".page__content")
        .ok()
        .flatten()
        .unwrap_or_else(|| body.clone().into());

    let update = move || {
        if let Some(w) = web_sys::window() {
            let scroll_y = w.scroll_y().unwrap_or(0.0);
            let viewport = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let content_top = content.get_bounding_client_rect().top() + scroll_y;
            let fraction = progress_fraction(
                scroll_y,
                content_top,
                f64::from(content.scroll_height()),
                viewport,
            );
            let _ = bar.style().set_property("transform", &format!("scaleX({fraction})"));
        }
    };
    update();
    attach_passive_scroll(&document, update.clone());

    let on_resize = Closure::<dyn FnMut()>::new(update);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Attach a passive scroll listener for the rest of the page lifetime.
#[cfg(feature = "csr")]
fn attach_passive_scroll(document: &web_sys::Document, handler: impl FnMut() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let listener = Closure::<dyn FnMut()>::new(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        listener.as_ref().unchecked_ref(),
        &options,
    );
    listener.forget();
}
