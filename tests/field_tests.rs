// Host-side integration tests for the beam field (component state).
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::Vec2;

fn props(interactive: bool) -> BackgroundProps {
    BackgroundProps {
        interactive,
        ..BackgroundProps::default()
    }
}

#[test]
fn full_hd_field_uses_widest_tier() {
    let field = BeamField::new(Viewport::new(1920.0, 1080.0), &props(false), 1);
    assert_eq!(field.beams().len(), 35);
    assert_eq!(field.tier().beam_width, 80.0);
    assert_eq!(field.tier().beam_length, 1000.0);
}

#[test]
fn missing_viewport_uses_fallback_size() {
    let field = BeamField::new(None, &props(false), 1);
    assert_eq!(field.viewport(), FALLBACK_VIEWPORT);
    assert_eq!(field.beams().len(), SizingTier::default().beam_count);
}

#[test]
fn same_seed_gives_same_field() {
    let a = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 99);
    let b = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 99);
    assert_eq!(a.beams(), b.beams());
}

#[test]
fn beam_count_is_fixed_between_resizes() {
    let mut field = BeamField::new(Viewport::new(1920.0, 1080.0), &props(false), 3);
    for _ in 0..5_000 {
        field.step();
        assert_eq!(field.beams().len(), 35);
    }
    field.resize(Viewport::new(400.0, 800.0).unwrap());
    assert_eq!(field.beams().len(), 12);
    assert_eq!(field.tier(), tier_for_width(400.0));
}

#[test]
fn step_keeps_beam_at_minus_fifty_in_place() {
    let mut field = BeamField::new(Viewport::new(1200.0, 800.0), &props(false), 5);
    let speed = {
        let b = &mut field.beams_mut()[0];
        b.pos.y = -50.0;
        b.length = 900.0;
        b.speed
    };
    let x = field.beams()[0].pos.x;
    field.step();
    let b = &field.beams()[0];
    assert!((b.pos.y - (-50.0 - speed)).abs() < 1e-4);
    assert_eq!(b.pos.x, x);
}

#[test]
fn step_recycles_beams_that_left_the_top() {
    let vp = Viewport::new(1200.0, 800.0).unwrap();
    let mut field = BeamField::new(Some(vp), &props(false), 5);
    {
        let b = &mut field.beams_mut()[4];
        b.length = 500.0;
        b.pos.y = -600.0;
    }
    field.step();
    let b = &field.beams()[4];
    assert_eq!(b.pos.y, vp.height + 100.0);
    let expected_hue = 190.0 + (4.0 * 70.0) / field.beams().len() as f32;
    assert!((b.hue - expected_hue).abs() < 1e-4);
}

#[test]
fn beams_eventually_cycle_back_from_below() {
    let vp = Viewport::new(600.0, 700.0).unwrap();
    let mut field = BeamField::new(Some(vp), &props(false), 11);
    let mut recycled = false;
    for _ in 0..10_000 {
        field.step();
        if field
            .beams()
            .iter()
            .any(|b| b.pos.y == vp.height + OFFSCREEN_MARGIN)
        {
            recycled = true;
            break;
        }
    }
    assert!(recycled);
}

#[test]
fn clicks_do_nothing_when_not_interactive() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(false), 2);
    for i in 0..20 {
        assert_eq!(field.clicked(Vec2::new(i as f32, 10.0)), 0);
    }
    field.pointer_moved(Vec2::new(100.0, 100.0));
    assert!(field.particles().is_empty());
    assert!(field.pointer().is_none());
}

#[test]
fn interactive_click_spawns_a_burst_at_origin() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 2);
    let origin = Vec2::new(321.0, 123.0);
    assert_eq!(field.clicked(origin), DEFAULT_PARTICLE_BURST);
    let palette = field.palette();
    let particles = field.particles();
    assert_eq!(particles.len(), 10);
    for p in particles {
        assert_eq!(p.pos, origin);
        assert_eq!(p.life, 0);
        assert_eq!(p.opacity, 1.0);
        assert!(p.max_life >= 60 && p.max_life < 120);
        assert!(p.hue >= palette.base_hue && p.hue <= palette.base_hue + palette.hue_range);
    }
    // one burst shares one hue
    assert!(particles.iter().all(|p| p.hue == particles[0].hue));
}

#[test]
fn particles_are_not_advanced_by_step() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 2);
    field.clicked(Vec2::new(50.0, 50.0));
    let before = field.particles().to_vec();
    for _ in 0..30 {
        field.step();
    }
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn particle_store_is_bounded() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 2);
    for i in 0..200 {
        field.clicked(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(field.particles().len(), MAX_PARTICLES);
    // newest burst is kept
    assert_eq!(field.particles().last().map(|p| p.pos.x), Some(199.0));
}

#[test]
fn pointer_is_tracked_when_interactive() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 2);
    field.pointer_moved(Vec2::new(5.0, 6.0));
    assert_eq!(field.pointer(), Some(Vec2::new(5.0, 6.0)));
}

#[test]
fn set_props_switches_palette_and_clears_pointer() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(true), 2);
    field.pointer_moved(Vec2::new(5.0, 6.0));
    let next = BackgroundProps {
        color_scheme: ColorScheme::Green,
        intensity: Intensity::Subtle,
        ..BackgroundProps::default()
    };
    field.set_props(&next);
    assert!(!field.is_interactive());
    assert!(field.pointer().is_none());
    assert_eq!(field.intensity(), Intensity::Subtle);
    let green = ColorScheme::Green.preset().unwrap();
    assert!(field
        .beams()
        .iter()
        .all(|b| b.hue >= green.base_hue && b.hue <= green.base_hue + green.hue_range));
}

#[test]
fn set_props_reports_interactivity_flips() {
    let mut field = BeamField::new(Viewport::new(800.0, 600.0), &props(false), 4);
    assert_eq!(field.set_props(&props(true)), Some(true));
    assert!(field.is_interactive());
    assert_eq!(field.clicked(Vec2::new(10.0, 10.0)), DEFAULT_PARTICLE_BURST);

    assert_eq!(field.set_props(&props(true)), None);

    field.pointer_moved(Vec2::new(1.0, 2.0));
    assert_eq!(field.set_props(&props(false)), Some(false));
    assert!(field.pointer().is_none());
    assert_eq!(field.clicked(Vec2::new(10.0, 10.0)), 0);
    assert_eq!(field.set_props(&props(false)), None);
}
