use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Canvas CSS size in pixels, or `None` before layout.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    (w > 0.0 && h > 0.0).then_some((w, h))
}

/// Match the backing store to CSS size times devicePixelRatio.
/// Returns true when the backing size changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

pub fn stored_locale() -> Option<String> {
    web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(crate::constants::LOCALE_STORAGE_KEY).ok().flatten())
}

pub fn store_locale(code: &str) {
    if let Some(storage) = web::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(crate::constants::LOCALE_STORAGE_KEY, code) {
            log::warn!("[dom] could not persist locale: {:?}", e);
        }
    }
}

pub fn set_document_lang(document: &web::Document, code: &str) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", code);
    }
}
