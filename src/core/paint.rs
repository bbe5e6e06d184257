// Backend-neutral drawing: per-beam appearance, gradient profile and the
// `BeamSurface` seam that a concrete canvas implements.

use crate::core::beam::Beam;
use crate::core::field::BeamField;
use crate::core::scheme::Intensity;
use crate::core::sizing::{is_compact, Viewport};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Blur applied to the drawing context before beams are filled.
pub const CONTEXT_BLUR_PX: f32 = 35.0;

/// Horizontal displacement applied through `sin(wave_offset)`.
pub const WAVE_AMPLITUDE: f32 = 15.0;

pub const POINTER_RADIUS_COMPACT: f32 = 150.0;
pub const POINTER_RADIUS_WIDE: f32 = 200.0;

// How strongly a nearby pointer grows and brightens an interactive beam.
pub const POINTER_SCALE_GAIN: f32 = 0.3;
pub const POINTER_BRIGHTEN_GAIN: f32 = 0.5;

// Beam colour is fixed regardless of palette saturation/lightness.
pub const BEAM_SATURATION: f32 = 85.0;
pub const BEAM_LIGHTNESS: f32 = 65.0;

/// `(offset along beam, alpha factor)`: fade in, plateau, fade out.
pub const BEAM_STOP_PROFILE: [(f32, f32); 8] = [
    (0.0, 0.0),
    (0.1, 0.5),
    (0.2, 0.8),
    (0.4, 1.0),
    (0.6, 1.0),
    (0.8, 0.8),
    (0.9, 0.5),
    (1.0, 0.0),
];

pub const OVERLAY_MIN_OPACITY: f32 = 0.05;
pub const OVERLAY_MAX_OPACITY: f32 = 0.15;
pub const OVERLAY_PERIOD_SEC: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamAppearance {
    pub alpha: f32,
    pub scale: f32,
}

/// Where and how large to draw one beam, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamPlacement {
    pub origin: Vec2,
    pub angle_rad: f32,
    pub width: f32,
    pub length: f32,
}

/// Rendering backend. `begin_frame` is called once per tick, then
/// `fill_beam` once per beam in simulation order.
pub trait BeamSurface {
    fn begin_frame(&mut self, viewport: Viewport, blur_px: f32);
    fn fill_beam(&mut self, placement: &BeamPlacement, hue: f32, stops: &[GradientStop]);
}

pub fn gradient_stops(alpha: f32) -> SmallVec<[GradientStop; 8]> {
    BEAM_STOP_PROFILE
        .iter()
        .map(|&(offset, factor)| GradientStop {
            offset,
            alpha: alpha * factor,
        })
        .collect()
}

pub fn hsla(hue: f32, alpha: f32) -> String {
    format!(
        "hsla({:.1}, {}%, {}%, {:.4})",
        hue, BEAM_SATURATION, BEAM_LIGHTNESS, alpha
    )
}

#[inline]
pub fn pointer_radius(viewport: Viewport) -> f32 {
    if is_compact(viewport) {
        POINTER_RADIUS_COMPACT
    } else {
        POINTER_RADIUS_WIDE
    }
}

pub fn beam_appearance(
    beam: &Beam,
    pointer: Option<Vec2>,
    radius: f32,
    intensity: Intensity,
) -> BeamAppearance {
    let pulse_factor = 0.8 + beam.pulse.sin() * 0.2;
    let influence = pointer
        .filter(|_| beam.interactive)
        .map(|p| p.distance(wave_origin(beam)))
        .filter(|d| *d < radius)
        .map(|d| 1.0 - d / radius)
        .unwrap_or(0.0);

    let scale = beam.scale * (1.0 + POINTER_SCALE_GAIN * influence);
    let boost = 1.0 + POINTER_BRIGHTEN_GAIN * influence;
    BeamAppearance {
        // not clamped: a strong pointer boost may push alpha past 1
        alpha: beam.opacity * pulse_factor * scale * boost * intensity.opacity_factor(),
        scale,
    }
}

/// Drawn anchor of a beam: its position shifted sideways by the wave offset.
/// Pointer falloff is measured from here so hits match what is on screen.
#[inline]
pub fn wave_origin(beam: &Beam) -> Vec2 {
    Vec2::new(
        beam.pos.x + beam.wave_offset.sin() * WAVE_AMPLITUDE,
        beam.pos.y,
    )
}

pub fn place_beam(beam: &Beam, appearance: BeamAppearance) -> BeamPlacement {
    BeamPlacement {
        origin: wave_origin(beam),
        angle_rad: beam.angle_deg.to_radians(),
        width: beam.width * appearance.scale,
        length: beam.length * appearance.scale,
    }
}

pub fn render_frame<S: BeamSurface + ?Sized>(field: &BeamField, surface: &mut S) {
    let viewport = field.viewport();
    let radius = pointer_radius(viewport);
    surface.begin_frame(viewport, CONTEXT_BLUR_PX);
    for beam in field.beams() {
        let look = beam_appearance(beam, field.pointer(), radius, field.intensity());
        let placement = place_beam(beam, look);
        surface.fill_beam(&placement, beam.hue, &gradient_stops(look.alpha));
    }
}

/// Opacity of the pulsing overlay layer at `t_sec` after mount.
pub fn overlay_opacity(t_sec: f32) -> f32 {
    let phase = (t_sec / OVERLAY_PERIOD_SEC * TAU).cos();
    let mid = (OVERLAY_MIN_OPACITY + OVERLAY_MAX_OPACITY) * 0.5;
    let half = (OVERLAY_MAX_OPACITY - OVERLAY_MIN_OPACITY) * 0.5;
    mid - half * phase
}
