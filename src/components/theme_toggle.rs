//! Floating dark/light theme toggle.
//!
//! Owns the preference resolver and wires it to the page: waits for the
//! inversion engine behind the gate, resolves and applies the initial
//! theme, then renders the toggle button and subscribes to OS preference
//! changes. The button and the subscription exist only after the first
//! apply, so no click or OS event can ever race an unapplied theme. If
//! the gate gives up the button is never rendered at all.

use leptos::prelude::*;

use crate::state::theme::{Theme, toggle_icon, toggle_label};

/// Theme toggle button, rendered once the initial theme is applied.
///
/// Icon, label, and tooltip all describe the action a click performs,
/// not the current state.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    // The rendered theme; `None` until initial resolution completes.
    let resolved = RwSignal::new(None::<Theme>);

    #[cfg(feature = "csr")]
    let on_click = {
        use crate::state::resolver::ThemeController;
        use crate::util::gate::{self, GateOutcome};
        use crate::util::{dark_reader, media, storage, styles};

        let controller = RwSignal::new(ThemeController::new(
            storage::LocalPreferenceStore,
            media::MediaQueryScheme,
            dark_reader::DarkReaderEngine,
            styles::DocumentOverrides,
        ));

        leptos::task::spawn_local(async move {
            controller.update(|c| c.begin_wait());
            if gate::wait_for_dark_reader().await == GateOutcome::GaveUp {
                // Engine never arrived; leave the page undecorated.
                return;
            }
            if let Some(theme) = controller.try_update(|c| c.resolve()) {
                resolved.set(Some(theme));
            }
            // Attached only after the first apply, per the ordering
            // contract; ignored by the controller once the user has
            // made an explicit choice.
            media::subscribe(move |new| {
                if let Some(adopted) = controller.try_update(|c| c.system_changed(new)).flatten() {
                    resolved.set(Some(adopted));
                }
            });
        });

        move |_| {
            if let Some(next) = controller.try_update(|c| c.toggle()).flatten() {
                resolved.set(Some(next));
            }
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_click = move |_| {};

    view! {
        <Show when=move || resolved.get().is_some()>
            <button
                id="darkModeToggle"
                type="button"
                aria-label=move || resolved.get().map(toggle_label).unwrap_or_default()
                title=move || resolved.get().map(toggle_label).unwrap_or_default()
                on:click=on_click
            >
                <span aria-hidden="true">
                    {move || resolved.get().map(toggle_icon).unwrap_or_default()}
                </span>
            </button>
        </Show>
    }
}
