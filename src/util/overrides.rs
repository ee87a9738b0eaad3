//! Manual accent-color overrides.
//!
//! DarkReader recolors the whole page automatically, which desaturates the
//! site's accent-colored controls. These rules pin each of them back to the
//! accent color; they are active only while the dark theme is applied.

#[cfg(test)]
#[path = "overrides_test.rs"]
mod overrides_test;

use crate::state::theme::Theme;

/// Id of the single injected `<style>` element.
pub const OVERRIDE_STYLE_ID: &str = "darkmode-overrides";

/// Site accent color, and the darker second stop of the progress gradient.
pub const ACCENT: &str = "#0ea5e9";
pub const ACCENT_DEEP: &str = "#0284c7";

/// Selectors pinned to the accent color while dark mode is active.
pub const OVERRIDE_SELECTORS: [&str; 6] = [
    "#readingProgress",
    "#backToTop",
    "#darkModeToggle",
    "#subscribeFloat",
    "#subscribe-cta button[type=\"submit\"]",
    ".consent-btn.accept",
];

/// The full override rule set.
pub fn override_css() -> &'static str {
    concat!(
        "#readingProgress { background: linear-gradient(90deg, #0ea5e9, #0284c7) !important; }",
        "#backToTop { background: #0ea5e9 !important; color: #fff !important; }",
        "#darkModeToggle { background: #0ea5e9 !important; color: #fff !important; }",
        "#subscribeFloat { background: #0ea5e9 !important; color: #fff !important; }",
        "#subscribe-cta button[type=\"submit\"] { background: #0ea5e9 !important; color: #fff !important; }",
        ".consent-btn.accept { background: #0ea5e9 !important; color: #fff !important; }",
    )
}

/// Stylesheet content for a theme: the full rule set while dark, empty
/// while light (the style element stays in the document, inert).
pub fn css_for(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => override_css(),
        Theme::Light => "",
    }
}
