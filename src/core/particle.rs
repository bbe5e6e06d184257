// Click bursts. Particles are spawned and retained but have no per-frame
// update or draw path; the loop only ever appends to the store.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

pub const DEFAULT_PARTICLE_BURST: usize = 10;

/// Oldest particles are evicted beyond this many.
pub const MAX_PARTICLES: usize = 512;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub hue: f32,
    pub life: u32,
    pub max_life: u32,
}

pub fn spawn_particles<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    origin: Vec2,
    hue: f32,
    count: usize,
    rng: &mut R,
) {
    particles.extend((0..count).map(|_| {
        let heading = rng.gen::<f32>() * TAU;
        let speed: f32 = rng.gen_range(1.0..3.0);
        Particle {
            pos: origin,
            vel: Vec2::from_angle(heading) * speed,
            size: rng.gen_range(1.0..4.0),
            opacity: 1.0,
            hue,
            life: 0,
            max_life: rng.gen_range(60..120),
        }
    }));
    if particles.len() > MAX_PARTICLES {
        let excess = particles.len() - MAX_PARTICLES;
        particles.drain(..excess);
    }
}
