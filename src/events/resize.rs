use super::Listener;
use crate::core::ResizeCoalescer;
use crate::dom;
use crate::frame::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Records each window resize; the frame tick applies it once events settle.
pub fn wire_resize(
    window: &web::Window,
    pending: &Rc<RefCell<ResizeCoalescer>>,
    clock: Clock,
) -> anyhow::Result<Listener> {
    let pending = pending.clone();
    Listener::attach(window, "resize", move |_ev: web::Event| {
        if let Some(viewport) = dom::window_viewport() {
            pending.borrow_mut().note(viewport, clock.now_sec());
        }
    })
}
