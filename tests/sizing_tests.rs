// Host-side tests for the responsive sizing policy.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;

#[test]
fn breakpoints_select_documented_tiers() {
    let cases = [
        (479.0, 12, 40.0, 500.0),
        (480.0, 18, 50.0, 650.0),
        (767.0, 18, 50.0, 650.0),
        (768.0, 24, 60.0, 800.0),
        (1023.0, 24, 60.0, 800.0),
        (1024.0, 30, 70.0, 900.0),
        (1439.0, 30, 70.0, 900.0),
        (1440.0, 35, 80.0, 1000.0),
    ];
    for (width, count, beam_width, beam_length) in cases {
        let t = tier_for_width(width);
        assert_eq!(t.beam_count, count, "count at width {width}");
        assert_eq!(t.beam_width, beam_width, "beam width at width {width}");
        assert_eq!(t.beam_length, beam_length, "beam length at width {width}");
    }
}

#[test]
fn every_width_maps_to_one_of_five_tiers() {
    let known: Vec<SizingTier> = [100.0, 500.0, 800.0, 1200.0, 2000.0]
        .iter()
        .map(|w| tier_for_width(*w))
        .collect();
    for w in (0..4000).step_by(7) {
        let t = tier_for_width(w as f32);
        assert!(known.contains(&t), "unexpected tier at width {w}");
    }
}

#[test]
fn full_hd_gets_the_widest_tier() {
    let t = tier_for_width(1920.0);
    assert_eq!(t.beam_count, 35);
    assert_eq!(t.beam_width, 80.0);
    assert_eq!(t.beam_length, 1000.0);
}

#[test]
fn missing_viewport_falls_back_to_defaults() {
    assert_eq!(tier_for_viewport(None), SizingTier::default());
    assert_eq!(SizingTier::default(), tier_for_width(FALLBACK_VIEWPORT.width));
}

#[test]
fn degenerate_viewports_are_rejected() {
    assert!(Viewport::new(0.0, 600.0).is_none());
    assert!(Viewport::new(800.0, -1.0).is_none());
    assert!(Viewport::new(f32::NAN, 600.0).is_none());
    assert!(Viewport::new(f32::INFINITY, 600.0).is_none());
    assert!(Viewport::new(800.0, 600.0).is_some());
}

#[test]
fn column_count_switches_at_compact_width() {
    let phone = Viewport::new(767.0, 900.0).unwrap();
    let tablet = Viewport::new(768.0, 900.0).unwrap();
    assert_eq!(column_count(phone), 2);
    assert_eq!(column_count(tablet), 3);
    assert!(is_compact(phone));
    assert!(!is_compact(tablet));
}
