#![cfg(target_arch = "wasm32")]
use crate::core::{BackgroundProps, BeamField, ResizeCoalescer};
use crate::lifecycle::MountSlot;
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod overlay;
mod render;

use constants::{AUTO_CANVAS_ID, CANVAS_CSS_BLUR_PX, PROPS_DATA_ATTRIBUTE};

thread_local! {
    static AUTO_MOUNTED: RefCell<MountSlot<AnimatedBackground>> =
        RefCell::new(MountSlot::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("beams-backdrop starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if let Some(el) = document.get_element_by_id(AUTO_CANVAS_ID) {
        let props = el
            .get_attribute(PROPS_DATA_ATTRIBUTE)
            .map(|raw| parse_props_json(&raw))
            .unwrap_or_default();
        let background = AnimatedBackground::mount(AUTO_CANVAS_ID, props);
        // Drop any previous auto-mount outside the borrow.
        let previous =
            AUTO_MOUNTED.with(|slot| slot.borrow_mut().park(AUTO_CANVAS_ID, background));
        drop(previous);
    }
    Ok(())
}

/// Tear down the background `start` mounted on `#beams-canvas`, if any.
#[wasm_bindgen(js_name = unmountAuto)]
pub fn unmount_auto() {
    let taken = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take());
    if taken.is_some() {
        log::info!("[mount] auto-mounted background released");
    }
}

fn parse_props_json(raw: &str) -> BackgroundProps {
    match js_sys::JSON::parse(raw) {
        Ok(value) => props_from_js(&value),
        Err(e) => {
            log::warn!("[props] {} is not JSON: {:?}", PROPS_DATA_ATTRIBUTE, e);
            BackgroundProps::default()
        }
    }
}

/// Invalid props are logged and replaced with defaults; they never fail a mount.
fn props_from_js(value: &JsValue) -> BackgroundProps {
    if value.is_undefined() || value.is_null() {
        return BackgroundProps::default();
    }
    serde_wasm_bindgen::from_value::<BackgroundProps>(value.clone()).unwrap_or_else(|e| {
        log::warn!("[props] falling back to defaults: {}", e);
        BackgroundProps::default()
    })
}

/// Everything a live mount owns; dropping it tears the background down.
struct Mounted {
    field: Rc<RefCell<BeamField>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<events::Listener>,
    pointer_listeners: Vec<events::Listener>,
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
}

impl Mounted {
    /// Wire or drop pointer handling to match the field's interactivity.
    fn set_pointer_tracking(&mut self, enabled: bool) {
        if !enabled {
            self.pointer_listeners.clear();
            return;
        }
        if !self.pointer_listeners.is_empty() {
            return;
        }
        match events::wire_pointer_handlers(&self.window, &self.canvas, &self.field) {
            Ok(listeners) => self.pointer_listeners = listeners,
            Err(e) => log::error!("[mount] pointer handlers not attached: {:?}", e),
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.pointer_listeners.clear();
        self.listeners.clear();
        overlay::clear(&self.document);
    }
}

#[wasm_bindgen]
pub struct AnimatedBackground {
    mounted: Option<Mounted>,
    canvas_id: String,
}

#[wasm_bindgen]
impl AnimatedBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, props: JsValue) -> AnimatedBackground {
        Self::mount(canvas_id, props_from_js(&props))
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    /// Swap configuration in place; pointer listeners follow `interactive`.
    #[wasm_bindgen(js_name = setProps)]
    pub fn set_props(&mut self, props: JsValue) {
        let Some(m) = self.mounted.as_mut() else {
            return;
        };
        let flipped = m.field.borrow_mut().set_props(&props_from_js(&props));
        if let Some(interactive) = flipped {
            m.set_pointer_tracking(interactive);
            log::info!("[mount] #{} interactive={}", self.canvas_id, interactive);
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("[mount] #{} unmounted", self.canvas_id);
        }
    }
}

impl AnimatedBackground {
    fn mount(canvas_id: &str, props: BackgroundProps) -> AnimatedBackground {
        // A mount on the auto canvas replaces the one `start` made there.
        let previous = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take_for(canvas_id));
        if previous.is_some() {
            log::info!("[mount] #{} taking over the auto-mounted background", canvas_id);
        }
        drop(previous);

        let mounted = match mount_on(canvas_id, &props) {
            Ok(m) => Some(m),
            Err(e) => {
                // Nothing renders; the page stays usable.
                log::warn!("[mount] background inactive: {:?}", e);
                None
            }
        };
        AnimatedBackground {
            mounted,
            canvas_id: canvas_id.to_string(),
        }
    }
}

fn mount_on(canvas_id: &str, props: &BackgroundProps) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::window_viewport();
    let sized = viewport.unwrap_or_default();
    dom::sync_canvas_backing_size(&canvas, sized);
    dom::apply_css_blur(&canvas, CANVAS_CSS_BLUR_PX);

    let seed: u64 = rand::thread_rng().gen();
    let field = Rc::new(RefCell::new(BeamField::new(viewport, props, seed)));
    {
        let f = field.borrow();
        log::info!(
            "[mount] #{} {:.0}x{:.0} beams={} scheme={} interactive={}",
            canvas_id,
            sized.width,
            sized.height,
            f.beams().len(),
            props.color_scheme,
            f.is_interactive()
        );
    }

    let clock = frame::Clock::start();
    let pending_resize = Rc::new(RefCell::new(ResizeCoalescer::default()));
    let listeners = vec![events::wire_resize(&window, &pending_resize, clock)?];
    let pointer_listeners = if props.interactive {
        events::wire_pointer_handlers(&window, &canvas, &field)?
    } else {
        Vec::new()
    };

    let mut surface = render::Canvas2dSurface::new(ctx);
    surface.set_device_pixel_ratio(dom::device_pixel_ratio());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field: field.clone(),
        pending_resize,
        canvas: canvas.clone(),
        surface,
        document: document.clone(),
        clock,
        last_instant: Instant::now(),
        overlay_time: 0.0,
    }));

    Ok(Mounted {
        field,
        frame_loop: frame::FrameLoop::start(frame_ctx),
        listeners,
        pointer_listeners,
        window,
        canvas,
        document,
    })
}
