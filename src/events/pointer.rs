use super::Listener;
use crate::core::BeamField;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level pointer tracking and click bursts. Only wired for interactive
/// backgrounds; a non-interactive mount never registers these listeners.
pub fn wire_pointer_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<BeamField>>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(window, canvas, field)?,
        wire_click(window, canvas, field)?,
    ])
}

fn wire_pointermove(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<BeamField>>,
) -> anyhow::Result<Listener> {
    let canvas = canvas.clone();
    let field = field.clone();
    Listener::attach(window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos = input::pointer_canvas_css(ev, &canvas);
            field.borrow_mut().pointer_moved(pos);
        }
    })
}

fn wire_click(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<BeamField>>,
) -> anyhow::Result<Listener> {
    let canvas = canvas.clone();
    let field = field.clone();
    Listener::attach(window, "click", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos = input::pointer_canvas_css(ev, &canvas);
            let spawned = field.borrow_mut().clicked(pos);
            log::debug!("[click] {} particles at ({:.0},{:.0})", spawned, pos.x, pos.y);
        }
    })
}
