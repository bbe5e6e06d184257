use crate::constants::OVERLAY_ELEMENT_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

fn overlay_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(OVERLAY_ELEMENT_ID)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Drive the pulsing overlay layer; pages without the element are left alone.
/// Only the `opacity` property is touched so host inline styles survive.
#[inline]
pub fn set_opacity(document: &web::Document, opacity: f32) {
    if let Some(el) = overlay_element(document) {
        _ = el
            .style()
            .set_property("opacity", &format!("{:.3}", opacity));
    }
}

#[inline]
pub fn clear(document: &web::Document) {
    if let Some(el) = overlay_element(document) {
        _ = el.style().remove_property("opacity");
    }
}
