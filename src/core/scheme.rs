// Colour presets, intensity tiers and the prop bag handed over by the host page.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("unknown intensity `{0}` (expected subtle, medium or strong)")]
    UnknownIntensity(String),
    #[error("unknown color scheme `{0}`")]
    UnknownScheme(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Intensity {
    Subtle,
    Medium,
    #[default]
    Strong,
}

impl Intensity {
    /// Global multiplier applied to every beam's final alpha.
    pub fn opacity_factor(self) -> f32 {
        match self {
            Intensity::Subtle => 0.6,
            Intensity::Medium => 0.8,
            Intensity::Strong => 1.0,
        }
    }
}

impl FromStr for Intensity {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtle" => Ok(Intensity::Subtle),
            "medium" => Ok(Intensity::Medium),
            "strong" => Ok(Intensity::Strong),
            _ => Err(PropsError::UnknownIntensity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Intensity {
    type Error = PropsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Hue, hue spread, saturation and lightness for one colour scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base_hue: f32,
    pub hue_range: f32,
    pub saturation: f32,
    pub lightness: f32,
}

const fn palette(base_hue: f32, hue_range: f32, saturation: f32, lightness: f32) -> Palette {
    Palette {
        base_hue,
        hue_range,
        saturation,
        lightness,
    }
}

pub const DEFAULT_CUSTOM_HUE: f32 = 210.0;
pub const CUSTOM_HUE_RANGE: f32 = 60.0;
pub const DEFAULT_SATURATION: f32 = 85.0;
pub const DEFAULT_LIGHTNESS: f32 = 65.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorScheme {
    #[default]
    Blue,
    Purple,
    Cyan,
    Green,
    Pink,
    Orange,
    Sunset,
    Ocean,
    Aurora,
    Custom,
}

impl ColorScheme {
    pub const PRESETS: [ColorScheme; 9] = [
        ColorScheme::Blue,
        ColorScheme::Purple,
        ColorScheme::Cyan,
        ColorScheme::Green,
        ColorScheme::Pink,
        ColorScheme::Orange,
        ColorScheme::Sunset,
        ColorScheme::Ocean,
        ColorScheme::Aurora,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Blue => "blue",
            ColorScheme::Purple => "purple",
            ColorScheme::Cyan => "cyan",
            ColorScheme::Green => "green",
            ColorScheme::Pink => "pink",
            ColorScheme::Orange => "orange",
            ColorScheme::Sunset => "sunset",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Aurora => "aurora",
            ColorScheme::Custom => "custom",
        }
    }

    /// Preset palette; `None` for `Custom`, which is resolved from props.
    pub fn preset(self) -> Option<Palette> {
        let p = match self {
            ColorScheme::Blue => palette(190.0, 70.0, 85.0, 65.0),
            ColorScheme::Purple => palette(260.0, 60.0, 80.0, 65.0),
            ColorScheme::Cyan => palette(175.0, 40.0, 85.0, 60.0),
            ColorScheme::Green => palette(120.0, 60.0, 75.0, 55.0),
            ColorScheme::Pink => palette(310.0, 50.0, 85.0, 70.0),
            ColorScheme::Orange => palette(20.0, 40.0, 90.0, 60.0),
            ColorScheme::Sunset => palette(340.0, 60.0, 85.0, 65.0),
            ColorScheme::Ocean => palette(200.0, 50.0, 80.0, 55.0),
            ColorScheme::Aurora => palette(140.0, 120.0, 80.0, 60.0),
            ColorScheme::Custom => return None,
        };
        Some(p)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ColorScheme::PRESETS
            .iter()
            .chain(std::iter::once(&ColorScheme::Custom))
            .find(|c| c.name() == wanted)
            .copied()
            .ok_or_else(|| PropsError::UnknownScheme(s.to_string()))
    }
}

impl TryFrom<String> for ColorScheme {
    type Error = PropsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Component configuration as received from the host page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundProps {
    pub intensity: Intensity,
    pub interactive: bool,
    pub color_scheme: ColorScheme,
    pub custom_hue: Option<f32>,
    // Accepted and carried into the palette; the beam gradient still uses fixed 85%/65%.
    pub custom_saturation: Option<f32>,
    pub custom_lightness: Option<f32>,
}

impl BackgroundProps {
    pub fn palette(&self) -> Palette {
        self.color_scheme.preset().unwrap_or_else(|| {
            palette(
                self.custom_hue
                    .filter(|h| h.is_finite())
                    .map(|h| h.rem_euclid(360.0))
                    .unwrap_or(DEFAULT_CUSTOM_HUE),
                CUSTOM_HUE_RANGE,
                self.custom_saturation.unwrap_or(DEFAULT_SATURATION),
                self.custom_lightness.unwrap_or(DEFAULT_LIGHTNESS),
            )
        })
    }
}
