//! Color-theory harmonies — fixed hue-wheel relationships from one seed.
//!
//! Five harmonies, always in the same order, so consumers can index by
//! position as well as by kind. All hue arithmetic wraps around the
//! wheel; negative intermediates normalize by adding a full turn first.

use serde::{Deserialize, Serialize};
use tinct_color::{Hsl, Result};

// ---------------------------------------------------------------------------
// HarmonyKind
// ---------------------------------------------------------------------------

/// The hue-wheel relationship behind a harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyKind {
    /// Tints and shades of the seed hue.
    Monochromatic,
    /// The seed flanked by its ±30° neighbors.
    Analogous,
    /// The seed and its 180° opposite.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
}

impl HarmonyKind {
    /// Machine-friendly name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// Fixed descriptive string for this kind.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monochromatic => "Different shades of the same color",
            Self::Analogous => "Colors next to each other on the color wheel",
            Self::Complementary => "Colors opposite each other on the color wheel",
            Self::Triadic => "Three colors evenly spaced on the color wheel",
            Self::Tetradic => "Four colors forming a rectangle on the color wheel",
        }
    }

    /// All kinds, in generation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
            Self::Tetradic,
        ]
    }
}

// ---------------------------------------------------------------------------
// ColorHarmony
// ---------------------------------------------------------------------------

/// One derived harmony: the relationship and its ordered colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorHarmony {
    /// Which relationship produced these colors.
    pub kind: HarmonyKind,
    /// Two to four colors; order is significant.
    pub colors: Vec<Hsl>,
}

impl ColorHarmony {
    /// Fixed descriptive string, delegated from the kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Derive the five harmonies from a seed color.
///
/// Always returns exactly five entries, in [`HarmonyKind::all`] order.
/// The monochromatic tint/shade lightness is capped at 90 and floored
/// at 10; the other harmonies keep the seed's saturation and lightness
/// and move only the hue.
///
/// # Errors
///
/// Returns [`tinct_color::ColorError::InvalidColorFormat`] if `seed_hex`
/// is malformed.
pub fn generate_harmonies(seed_hex: &str) -> Result<Vec<ColorHarmony>> {
    let seed = Hsl::from_hex(seed_hex)?;

    Ok(vec![
        ColorHarmony {
            kind: HarmonyKind::Monochromatic,
            colors: vec![
                seed.with_lightness((seed.l + 30.0).min(90.0)),
                seed,
                seed.with_lightness((seed.l - 30.0).max(10.0)),
            ],
        },
        ColorHarmony {
            kind: HarmonyKind::Analogous,
            colors: vec![seed.shift_hue(-30.0), seed, seed.shift_hue(30.0)],
        },
        ColorHarmony {
            kind: HarmonyKind::Complementary,
            colors: vec![seed, seed.complement()],
        },
        ColorHarmony {
            kind: HarmonyKind::Triadic,
            colors: vec![seed, seed.shift_hue(120.0), seed.shift_hue(240.0)],
        },
        ColorHarmony {
            kind: HarmonyKind::Tetradic,
            colors: vec![
                seed,
                seed.shift_hue(90.0),
                seed.shift_hue(180.0),
                seed.shift_hue(270.0),
            ],
        },
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
