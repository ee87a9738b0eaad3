//! Code-language badges on highlighted code blocks.

#[cfg(test)]
#[path = "badges_test.rs"]
mod badges_test;

/// Extract the badge text from a `<code>` element's class list:
/// the first `language-*` class, uppercased. Empty suffixes produce
/// no badge.
pub fn language_label(classes: &str) -> Option<String> {
    classes
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_uppercase)
}

/// Append a `.code-badge` span to every Rouge code block that declares
/// a language.
#[cfg(feature = "csr")]
pub fn label_code_blocks() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(blocks) = document.query_selector_all(".highlighter-rouge pre") else { return };
    for i in 0..blocks.length() {
        let Some(pre) = blocks
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let Some(code) = pre.query_selector("code").ok().flatten() else { continue };
        let Some(label) = language_label(&code.class_name()) else { continue };

        let Ok(badge) = document.create_element("span") else { continue };
        badge.set_class_name("code-badge");
        badge.set_text_content(Some(&label));
        // The badge is positioned absolutely inside the block.
        if pre.style().get_property_value("position").unwrap_or_default().is_empty() {
            let _ = pre.style().set_property("position", "relative");
        }
        let _ = pre.append_child(&badge);
    }
}
