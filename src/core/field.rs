use crate::core::beam::{self, Beam};
use crate::core::particle::{self, Particle, DEFAULT_PARTICLE_BURST};
use crate::core::scheme::{BackgroundProps, Intensity, Palette};
use crate::core::sizing::{column_count, tier_for_width, SizingTier, Viewport};
use glam::Vec2;
use rand::prelude::*;

/// Simulation state owned by one mounted background.
///
/// Everything is mutated from a single thread: the frame tick plus the
/// pointer/resize handlers, which run between ticks and never re-enter.
pub struct BeamField {
    viewport: Viewport,
    tier: SizingTier,
    palette: Palette,
    intensity: Intensity,
    interactive: bool,
    beams: Vec<Beam>,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl BeamField {
    /// `None` means no host viewport could be measured; the fallback size is used.
    pub fn new(viewport: Option<Viewport>, props: &BackgroundProps, seed: u64) -> Self {
        let viewport = viewport.unwrap_or_default();
        let mut field = Self {
            viewport,
            tier: tier_for_width(viewport.width),
            palette: props.palette(),
            intensity: props.intensity,
            interactive: props.interactive,
            beams: Vec::new(),
            particles: Vec::new(),
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reinitialize();
        field
    }

    fn reinitialize(&mut self) {
        self.tier = tier_for_width(self.viewport.width);
        self.beams = beam::initialize(self.viewport, self.interactive, &self.palette, &mut self.rng);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.reinitialize();
        log::debug!(
            "[field] resized to {:.0}x{:.0}, {} beams",
            viewport.width,
            viewport.height,
            self.beams.len()
        );
    }

    /// Apply new props and re-seed the beams. Returns the new interactivity
    /// when it flipped, so the caller can wire or drop pointer listeners.
    pub fn set_props(&mut self, props: &BackgroundProps) -> Option<bool> {
        let flipped = (self.interactive != props.interactive).then_some(props.interactive);
        self.palette = props.palette();
        self.intensity = props.intensity;
        self.interactive = props.interactive;
        if !self.interactive {
            self.pointer = None;
        }
        self.reinitialize();
        flipped
    }

    /// One simulation tick: advance every beam, recycling those that left the top.
    pub fn step(&mut self) {
        let total = self.beams.len();
        let columns = column_count(self.viewport);
        for (i, b) in self.beams.iter_mut().enumerate() {
            beam::advance(b);
            if beam::needs_recycle(b) {
                beam::recycle(b, i, total, columns, self.viewport, &mut self.rng);
            }
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        if self.interactive {
            self.pointer = Some(pos);
        }
    }

    /// Spawns a particle burst at `pos`; returns how many were added.
    pub fn clicked(&mut self, pos: Vec2) -> usize {
        if !self.interactive {
            return 0;
        }
        let hue = self.palette.base_hue + self.rng.gen::<f32>() * self.palette.hue_range;
        particle::spawn_particles(
            &mut self.particles,
            pos,
            hue,
            DEFAULT_PARTICLE_BURST,
            &mut self.rng,
        );
        DEFAULT_PARTICLE_BURST
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn beams_mut(&mut self) -> &mut [Beam] {
        &mut self.beams
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tier(&self) -> SizingTier {
        self.tier
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}
