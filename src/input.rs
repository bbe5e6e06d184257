use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
///
/// Beams live in CSS-pixel space; the devicePixelRatio is applied only when
/// drawing, so no backing-store scaling happens here.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
