//! # site-client
//!
//! WASM client layer for the content site: resolves and synchronizes the
//! dark/light theme (persisted preference, live OS signal, DarkReader
//! inversion engine behind a bounded readiness gate) and applies a set of
//! one-shot page decorations.
//!
//! The theme state machine and every other piece of real logic live in
//! `state/` and the pure parts of `util/` and `enhance/`, so the crate's
//! tests run natively; browser bindings are gated behind the `csr`
//! feature.

pub mod components;
pub mod enhance;
pub mod state;
pub mod util;

/// Browser entry point: decorate the page and mount the theme toggle.
///
/// The toggle component owns the whole theme lifecycle, including the
/// engine gate wait, so nothing theme-related happens before DarkReader
/// is available.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);

    enhance::decorate_page();
    leptos::mount::mount_to_body(components::theme_toggle::ThemeToggle);
}
