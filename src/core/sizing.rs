// Responsive sizing policy: viewport width tiers drive beam count and base size.

/// Viewport assumed when no host window can be measured.
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1024.0,
    height: 768.0,
};

/// Viewports narrower than this are treated as handheld (two columns, smaller pointer radius).
pub const COMPACT_MAX_WIDTH: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Returns `None` for a zero, negative or non-finite size, so callers fall
    /// back to defaults instead of sizing against a collapsed surface.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        FALLBACK_VIEWPORT
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingTier {
    pub beam_count: usize,
    pub beam_width: f32,
    pub beam_length: f32,
}

const TIERS: [(f32, SizingTier); 4] = [
    (480.0, tier(12, 40.0, 500.0)),
    (768.0, tier(18, 50.0, 650.0)),
    (1024.0, tier(24, 60.0, 800.0)),
    (1440.0, tier(30, 70.0, 900.0)),
];

const WIDE_TIER: SizingTier = tier(35, 80.0, 1000.0);

const fn tier(beam_count: usize, beam_width: f32, beam_length: f32) -> SizingTier {
    SizingTier {
        beam_count,
        beam_width,
        beam_length,
    }
}

impl Default for SizingTier {
    fn default() -> Self {
        tier_for_width(FALLBACK_VIEWPORT.width)
    }
}

pub fn tier_for_width(width: f32) -> SizingTier {
    TIERS
        .iter()
        .find(|(limit, _)| width < *limit)
        .map(|(_, t)| *t)
        .unwrap_or(WIDE_TIER)
}

#[inline]
pub fn tier_for_viewport(viewport: Option<Viewport>) -> SizingTier {
    viewport
        .map(|v| tier_for_width(v.width))
        .unwrap_or_default()
}

#[inline]
pub fn is_compact(viewport: Viewport) -> bool {
    viewport.width < COMPACT_MAX_WIDTH
}

/// Number of horizontal lanes recycled beams are distributed over.
#[inline]
pub fn column_count(viewport: Viewport) -> usize {
    if is_compact(viewport) {
        2
    } else {
        3
    }
}
