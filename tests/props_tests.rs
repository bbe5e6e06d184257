// Host-side tests for colour schemes, intensity and prop parsing.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;

#[test]
fn nine_named_presets_plus_custom() {
    assert_eq!(ColorScheme::PRESETS.len(), 9);
    for scheme in ColorScheme::PRESETS {
        let p = scheme.preset().expect("preset palette");
        assert!(p.hue_range > 0.0);
        assert_eq!(scheme.name().parse::<ColorScheme>(), Ok(scheme));
    }
    assert!(ColorScheme::Custom.preset().is_none());
    assert_eq!("Custom".parse::<ColorScheme>(), Ok(ColorScheme::Custom));
}

#[test]
fn unknown_names_are_typed_errors() {
    assert_eq!(
        "neon".parse::<ColorScheme>(),
        Err(PropsError::UnknownScheme("neon".to_string()))
    );
    assert_eq!(
        "loud".parse::<Intensity>(),
        Err(PropsError::UnknownIntensity("loud".to_string()))
    );
    assert!(PropsError::UnknownScheme("neon".into())
        .to_string()
        .contains("neon"));
}

#[test]
fn intensity_factors() {
    assert_eq!(Intensity::Subtle.opacity_factor(), 0.6);
    assert_eq!(Intensity::Medium.opacity_factor(), 0.8);
    assert_eq!(Intensity::Strong.opacity_factor(), 1.0);
    assert_eq!(Intensity::default(), Intensity::Strong);
}

#[test]
fn empty_object_gives_defaults() {
    let props: BackgroundProps = serde_json::from_str("{}").unwrap();
    assert_eq!(props, BackgroundProps::default());
    assert!(!props.interactive);
    assert_eq!(props.color_scheme, ColorScheme::Blue);
    assert_eq!(props.palette(), ColorScheme::Blue.preset().unwrap());
}

#[test]
fn camel_case_props_are_recognised() {
    let props: BackgroundProps = serde_json::from_str(
        r#"{
            "intensity": "medium",
            "interactive": true,
            "colorScheme": "custom",
            "customHue": 30,
            "customSaturation": 40,
            "customLightness": 50,
            "className": "ignored"
        }"#,
    )
    .unwrap();
    assert_eq!(props.intensity, Intensity::Medium);
    assert!(props.interactive);
    let p = props.palette();
    assert_eq!(p.base_hue, 30.0);
    assert_eq!(p.hue_range, CUSTOM_HUE_RANGE);
    // carried along even though beams are always drawn at 85%/65%
    assert_eq!(p.saturation, 40.0);
    assert_eq!(p.lightness, 50.0);
}

#[test]
fn custom_hue_is_ignored_for_presets() {
    let props = BackgroundProps {
        color_scheme: ColorScheme::Pink,
        custom_hue: Some(10.0),
        ..BackgroundProps::default()
    };
    assert_eq!(props.palette(), ColorScheme::Pink.preset().unwrap());
}

#[test]
fn custom_scheme_without_hue_uses_default() {
    let props = BackgroundProps {
        color_scheme: ColorScheme::Custom,
        custom_hue: Some(f32::NAN),
        ..BackgroundProps::default()
    };
    let p = props.palette();
    assert_eq!(p.base_hue, DEFAULT_CUSTOM_HUE);
    assert_eq!(p.saturation, DEFAULT_SATURATION);
    assert_eq!(p.lightness, DEFAULT_LIGHTNESS);

    let wrapped = BackgroundProps {
        color_scheme: ColorScheme::Custom,
        custom_hue: Some(400.0),
        ..BackgroundProps::default()
    };
    assert_eq!(wrapped.palette().base_hue, 40.0);
}

#[test]
fn bad_scheme_name_fails_deserialisation() {
    let res = serde_json::from_str::<BackgroundProps>(r#"{"colorScheme":"neon"}"#);
    let err = res.unwrap_err().to_string();
    assert!(err.contains("neon"), "{err}");
}
