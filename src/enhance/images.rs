//! Image niceties: native lazy-loading and a click-to-zoom lightbox.

#[cfg(feature = "csr")]
const OVERLAY_STYLE: &str = "position:fixed;inset:0;background:rgba(0,0,0,0.8);\
display:none;align-items:center;justify-content:center;z-index:9999;";

#[cfg(feature = "csr")]
const ZOOM_IMAGE_STYLE: &str = "max-width:90vw;max-height:90vh;\
box-shadow:0 10px 30px rgba(0,0,0,0.4);border-radius:8px;";

/// Add `loading="lazy"` to every image that does not set it already.
#[cfg(feature = "csr")]
pub fn lazy_load_images() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(images) = document.query_selector_all("img:not([loading])") else { return };
    for i in 0..images.length() {
        if let Some(img) = images.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            let _ = img.set_attribute("loading", "lazy");
        }
    }
}

/// Build the lightbox overlay and make every content image zoomable.
///
/// One overlay serves the whole page; clicking it or pressing Escape
/// closes it again.
#[cfg(feature = "csr")]
pub fn install_lightbox() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Some(body) = document.body() else { return };

    let Some(overlay) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let _ = overlay.set_attribute("style", OVERLAY_STYLE);

    let Some(zoom) = document
        .create_element("img")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    let _ = zoom.set_attribute("style", ZOOM_IMAGE_STYLE);
    if overlay.append_child(&zoom).is_err() || body.append_child(&overlay).is_err() {
        return;
    }

    // Click anywhere on the overlay to close.
    let close_target = overlay.clone();
    let on_overlay_click = Closure::<dyn FnMut()>::new(move || {
        let _ = close_target.style().set_property("display", "none");
    });
    let _ = overlay
        .add_event_listener_with_callback("click", on_overlay_click.as_ref().unchecked_ref());
    on_overlay_click.forget();

    // Escape closes too.
    let escape_target = overlay.clone();
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                let _ = escape_target.style().set_property("display", "none");
            }
        },
    );
    let _ = document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();

    let Ok(images) = document.query_selector_all(".page__content img") else { return };
    for i in 0..images.length() {
        let Some(img) = images
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            continue;
        };
        let _ = img.style().set_property("cursor", "zoom-in");

        let overlay = overlay.clone();
        let zoom = zoom.clone();
        let source = img.clone();
        let on_image_click = Closure::<dyn FnMut()>::new(move || {
            zoom.set_src(&source.src());
            let _ = overlay.style().set_property("display", "flex");
        });
        let _ =
            img.add_event_listener_with_callback("click", on_image_click.as_ref().unchecked_ref());
        on_image_click.forget();
    }
}
