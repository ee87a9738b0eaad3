//! Heading-structure diagnostic.
//!
//! Authors sometimes skip heading levels (an H2 followed by an H4), which
//! breaks the document outline for screen readers. This logs a console
//! warning per jump; it never mutates the page.

#[cfg(test)]
#[path = "headings_test.rs"]
mod headings_test;

/// Indices of headings whose level jumps more than one step past the
/// previous heading.
pub fn jump_positions(levels: &[u8]) -> Vec<usize> {
    let mut jumps = Vec::new();
    let mut last: Option<u8> = None;
    for (i, &level) in levels.iter().enumerate() {
        if let Some(prev) = last {
            if level > prev + 1 {
                jumps.push(i);
            }
        }
        last = Some(level);
    }
    jumps
}

/// Warn in the console for every heading-level jump inside the content.
#[cfg(feature = "csr")]
pub fn warn_on_level_jumps() {
    use wasm_bindgen::JsCast;

    const SELECTOR: &str = ".page__content h1, .page__content h2, .page__content h3, \
.page__content h4, .page__content h5, .page__content h6";

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(nodes) = document.query_selector_all(SELECTOR) else { return };

    let mut levels = Vec::new();
    let mut texts = Vec::new();
    for i in 0..nodes.length() {
        let Some(heading) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Ok(level) = heading.tag_name().trim_start_matches(['h', 'H']).parse::<u8>() else {
            continue;
        };
        levels.push(level);
        texts.push(heading.text_content().unwrap_or_default());
    }

    for i in jump_positions(&levels) {
        let prev = levels[i - 1];
        let level = levels[i];
        let text: String = texts[i].trim().chars().take(80).collect();
        leptos::logging::warn!("Heading level jump detected: H{prev} -> H{level} at {text}");
    }
}
