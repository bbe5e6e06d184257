/// Browser-side tuning constants for mounting and compositing the background.
///
/// Simulation and drawing constants live with the pure code in `core`; the
/// values here only concern the host page.
// Canvas picked up automatically by `start()` when present
pub const AUTO_CANVAS_ID: &str = "beams-canvas";
// JSON prop bag read from the auto-mounted canvas
pub const PROPS_DATA_ATTRIBUTE: &str = "data-props";

// Element whose opacity pulses above the beams
pub const OVERLAY_ELEMENT_ID: &str = "beams-overlay";

// Second blur layer, applied to the canvas element via CSS
pub const CANVAS_CSS_BLUR_PX: f32 = 15.0;

// Upper bound on the frame delta fed to the overlay clock (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
