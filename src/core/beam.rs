// Beam lifecycle: spawn at mount/resize, advance every tick, recycle in place
// once a beam has drifted past the top edge.

use crate::core::scheme::Palette;
use crate::core::sizing::{tier_for_width, Viewport};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Beams are tilted into this band (degrees).
pub const ANGLE_MIN_DEG: f32 = -35.0;
pub const ANGLE_SPREAD_DEG: f32 = 10.0;

/// A beam is recycled once its tail is this far above the top edge.
pub const OFFSCREEN_MARGIN: f32 = 100.0;

/// Fraction of beams left non-interactive when interactivity is on.
pub const INTERACTIVE_THRESHOLD: f32 = 0.7;

/// Recycled beams get hues spread over this arc, starting at `RECYCLE_BASE_HUE`.
pub const RECYCLE_BASE_HUE: f32 = 190.0;
pub const RECYCLE_HUE_SPREAD: f32 = 70.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub pos: Vec2,
    pub width: f32,
    pub length: f32,
    pub angle_deg: f32,
    /// Upward travel per tick, in CSS pixels.
    pub speed: f32,
    pub opacity: f32,
    pub hue: f32,
    pub pulse: f32,
    pub pulse_speed: f32,
    pub interactive: bool,
    pub scale: f32,
    // Randomised alongside the rest but not consumed by the renderer.
    pub rotation_speed: f32,
    pub wave_offset: f32,
    pub wave_speed: f32,
}

impl Beam {
    pub fn spawn<R: Rng + ?Sized>(
        viewport: Viewport,
        palette: &Palette,
        interactive_enabled: bool,
        rng: &mut R,
    ) -> Self {
        let tier = tier_for_width(viewport.width);
        let (w, h) = (viewport.width, viewport.height);
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * w * 1.5 - w * 0.25,
                rng.gen::<f32>() * h * 1.5 - h * 0.25,
            ),
            width: tier.beam_width * (0.5 + rng.gen::<f32>()),
            length: tier.beam_length * (1.0 + rng.gen::<f32>() * 0.5),
            angle_deg: ANGLE_MIN_DEG + rng.gen::<f32>() * ANGLE_SPREAD_DEG,
            speed: 0.6 + rng.gen::<f32>() * 1.2,
            opacity: 0.12 + rng.gen::<f32>() * 0.16,
            hue: palette.base_hue + rng.gen::<f32>() * palette.hue_range,
            pulse: rng.gen::<f32>() * TAU,
            pulse_speed: 0.02 + rng.gen::<f32>() * 0.03,
            interactive: interactive_enabled && rng.gen::<f32>() > INTERACTIVE_THRESHOLD,
            scale: 1.0,
            rotation_speed: (rng.gen::<f32>() - 0.5) * 0.002,
            wave_offset: rng.gen::<f32>() * TAU,
            wave_speed: 0.01 + rng.gen::<f32>() * 0.02,
        }
    }
}

/// Build the full beam set for a viewport; the count comes from its sizing tier.
pub fn initialize<R: Rng + ?Sized>(
    viewport: Viewport,
    interactive_enabled: bool,
    palette: &Palette,
    rng: &mut R,
) -> Vec<Beam> {
    let count = tier_for_width(viewport.width).beam_count;
    (0..count)
        .map(|_| Beam::spawn(viewport, palette, interactive_enabled, rng))
        .collect()
}

#[inline]
pub fn advance(beam: &mut Beam) {
    beam.pos.y -= beam.speed;
    beam.pulse += beam.pulse_speed;
}

#[inline]
pub fn needs_recycle(beam: &Beam) -> bool {
    beam.pos.y + beam.length < -OFFSCREEN_MARGIN
}

/// Re-seat a beam below the bottom edge in lane `index % column_count`.
///
/// Hue is spread by beam index from a fixed base rather than drawn from the
/// active palette, so recycled beams drift towards the blue/cyan band no matter
/// which scheme the component was mounted with.
pub fn recycle<R: Rng + ?Sized>(
    beam: &mut Beam,
    index: usize,
    beam_count: usize,
    column_count: usize,
    viewport: Viewport,
    rng: &mut R,
) {
    let tier = tier_for_width(viewport.width);
    let columns = column_count.max(1);
    let column = (index % columns) as f32;
    let spacing = viewport.width / columns as f32;

    beam.pos.y = viewport.height + OFFSCREEN_MARGIN;
    beam.pos.x = column * spacing + spacing / 2.0 + (rng.gen::<f32>() - 0.5) * spacing * 0.5;
    beam.width = tier.beam_width * (1.0 + rng.gen::<f32>());
    beam.speed = 0.5 + rng.gen::<f32>() * 0.4;
    beam.hue = RECYCLE_BASE_HUE + (index as f32 * RECYCLE_HUE_SPREAD) / beam_count.max(1) as f32;
    beam.opacity = 0.2 + rng.gen::<f32>() * 0.1;
    beam.scale = 1.0;
    beam.rotation_speed = (rng.gen::<f32>() - 0.5) * 0.002;
}
