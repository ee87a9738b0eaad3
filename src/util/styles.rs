//! Injected override stylesheet element.
//!
//! One `<style id="darkmode-overrides">` in `<head>`, created on first use
//! and reused for the rest of the page. Only its text content changes:
//! the full override rule set while dark, empty while light.

use crate::state::resolver::OverrideSink;
#[cfg(feature = "csr")]
use crate::util::overrides::OVERRIDE_STYLE_ID;

/// [`OverrideSink`] over the document's `<head>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentOverrides;

impl OverrideSink for DocumentOverrides {
    fn set_css(&mut self, css: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(element) = find_or_create() {
                element.set_text_content(Some(css));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = css;
        }
    }
}

/// Find the override style element, creating and attaching it on first
/// call. Returns `None` without a document (nothing to style).
#[cfg(feature = "csr")]
fn find_or_create() -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    if let Some(existing) = document.get_element_by_id(OVERRIDE_STYLE_ID) {
        return Some(existing);
    }
    let element = document.create_element("style").ok()?;
    element.set_id(OVERRIDE_STYLE_ID);
    let head = document.head()?;
    head.append_child(&element).ok()?;
    Some(element)
}
