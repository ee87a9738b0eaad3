//! External-link hardening.
//!
//! Off-site links inside the content area open in a new tab with
//! `noopener noreferrer`, so the target page gets no window handle and
//! no referrer.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Whether a link host points off-site. Anchors the browser could not
/// parse a host from are left alone.
pub fn is_external(link_host: &str, page_host: &str) -> bool {
    !link_host.is_empty() && link_host != page_host
}

/// Add `target="_blank"` and `rel="noopener noreferrer"` to every
/// external `http(s)` link inside `.page__content`.
#[cfg(feature = "csr")]
pub fn harden_external_links() {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Ok(page_host) = window.location().hostname() else { return };

    let Ok(anchors) = document.query_selector_all(".page__content a[href^=\"http\"]") else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            continue;
        };
        if is_external(&anchor.hostname(), &page_host) {
            let _ = anchor.set_attribute("target", "_blank");
            let _ = anchor.set_attribute("rel", "noopener noreferrer");
        }
    }
}
