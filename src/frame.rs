use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{render_frame, overlay_opacity, BeamField, ResizeCoalescer};
use crate::dom;
use crate::lifecycle::LoopState;
use crate::overlay;
use crate::render::Canvas2dSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic time since mount.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

pub struct FrameContext {
    pub field: Rc<RefCell<BeamField>>,
    pub pending_resize: Rc<RefCell<ResizeCoalescer>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Canvas2dSurface,
    pub document: web::Document,
    pub clock: Clock,
    pub last_instant: Instant,
    pub overlay_time: f32,
}

impl FrameContext {
    /// One scheduled tick: settle resizes, advance the simulation, redraw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let ready = self
            .pending_resize
            .borrow_mut()
            .take_ready(self.clock.now_sec());
        if let Some(viewport) = ready {
            dom::sync_canvas_backing_size(&self.canvas, viewport);
            self.surface.set_device_pixel_ratio(dom::device_pixel_ratio());
            self.field.borrow_mut().resize(viewport);
            log::info!(
                "[frame] resized to {:.0}x{:.0}",
                viewport.width,
                viewport.height
            );
        }

        {
            let mut field = self.field.borrow_mut();
            field.step();
            render_frame(&*field, &mut self.surface);
        }

        self.overlay_time += dt_sec;
        overlay::set_opacity(&self.document, overlay_opacity(self.overlay_time));
    }
}

/// requestAnimationFrame driver. Dropping or cancelling it stops the loop and
/// releases the tick closure.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    state: Rc<Cell<LoopState>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let state = Rc::new(Cell::new(LoopState::default()));

        let tick_clone = tick.clone();
        let state_clone = state.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state_clone.get().is_running() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(t) = tick_clone.borrow().as_ref() {
                schedule(&state_clone, t);
            }
        }) as Box<dyn FnMut()>));

        if let Some(t) = tick.borrow().as_ref() {
            schedule(&state, t);
        }
        Self { tick, state }
    }

    pub fn is_running(&self) -> bool {
        self.state.get().is_running()
    }

    pub fn cancel(&self) {
        let mut s = self.state.get();
        let stopped = s.stop();
        self.state.set(s);
        if let (Some(Some(id)), Some(w)) = (stopped, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so the frame context is freed.
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop cancelled");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(state: &Cell<LoopState>, tick: &Closure<dyn FnMut()>) {
    let mut s = state.get();
    s.record_request(request_frame(tick));
    state.set(s);
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed, stopping loop: {:?}", e);
            None
        }
    }
}
