//! Brand palette derivation — one seed color to a complete role set.
//!
//! The seed becomes `primary` unchanged. `secondary` and `accent` sit at
//! fixed hue-wheel offsets with saturation/lightness nudged into usable
//! ranges. The neutral scale shares the seed hue, desaturated, with a
//! fixed lightness ladder. Semantic colors are constants.

use serde::{Deserialize, Serialize};
use tinct_color::{Hsl, Result};

// ---------------------------------------------------------------------------
// NeutralScale
// ---------------------------------------------------------------------------

/// Stop names and their fixed lightness values, lightest (50) to
/// darkest (900). The ladder is independent of the seed.
const NEUTRAL_LIGHTNESS: [(u16, f32); 10] = [
    (50, 98.0),
    (100, 95.0),
    (200, 90.0),
    (300, 80.0),
    (400, 60.0),
    (500, 40.0),
    (600, 30.0),
    (700, 20.0),
    (800, 15.0),
    (900, 10.0),
];

/// One stop of the neutral scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeutralStop {
    /// Stop name: 50, 100, 200, … 900.
    pub stop: u16,
    /// The color at this stop.
    pub color: Hsl,
}

/// The ten-stop neutral scale: one hue, desaturated, lightest to darkest.
///
/// Ordering is part of the contract — `stops[0]` is stop 50 and
/// `stops[9]` is stop 900, with strictly decreasing lightness between
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralScale {
    pub stops: [NeutralStop; 10],
}

impl NeutralScale {
    /// Derive the scale from a seed color.
    ///
    /// Hue follows the seed at every stop; saturation is capped at 20 so
    /// the scale reads as neutral; lightness is fixed per stop.
    fn derive(seed: Hsl) -> Self {
        let s = seed.s.min(20.0);
        Self {
            stops: NEUTRAL_LIGHTNESS.map(|(stop, l)| NeutralStop {
                stop,
                color: seed.with_saturation(s).with_lightness(l),
            }),
        }
    }

    /// Look up a stop by name (50, 100, … 900).
    #[must_use]
    pub fn stop(&self, stop: u16) -> Option<Hsl> {
        self.stops
            .iter()
            .find(|entry| entry.stop == stop)
            .map(|entry| entry.color)
    }

    /// The lightest stop (50).
    #[must_use]
    pub const fn lightest(&self) -> Hsl {
        self.stops[0].color
    }

    /// The darkest stop (900).
    #[must_use]
    pub const fn darkest(&self) -> Hsl {
        self.stops[9].color
    }

    /// Iterate the stops in order, lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = &NeutralStop> {
        self.stops.iter()
    }
}

// ---------------------------------------------------------------------------
// BrandPalette
// ---------------------------------------------------------------------------

/// A complete brand palette derived from one seed color.
///
/// A plain value type, fully owned by the caller. Either the whole
/// palette derives successfully or [`generate_palette`] fails — there is
/// no partially constructed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPalette {
    /// The seed color, unmodified.
    pub primary: Hsl,
    /// Adjacent hue (+30°), muted and darkened.
    pub secondary: Hsl,
    /// Complementary hue (+180°), saturated and brightened.
    pub accent: Hsl,
    /// Ten desaturated stops sharing the seed hue.
    pub neutral: NeutralScale,
    /// Fixed `#10b981`.
    pub success: Hsl,
    /// Fixed `#f59e0b`.
    pub warning: Hsl,
    /// Fixed `#ef4444`.
    pub error: Hsl,
    /// Fixed `#3b82f6`.
    pub info: Hsl,
}

/// Derive a complete brand palette from a seed color.
///
/// Pure and deterministic: the same seed always yields a structurally
/// identical palette.
///
/// # Errors
///
/// Returns [`tinct_color::ColorError::InvalidColorFormat`] if `seed_hex`
/// is not `#` plus six hex digits. No partial palette is produced.
pub fn generate_palette(seed_hex: &str) -> Result<BrandPalette> {
    let seed = Hsl::from_hex(seed_hex)?;

    // +30° hue, 10 points muted and darkened, floored at 20.
    let secondary = seed
        .shift_hue(30.0)
        .with_saturation((seed.s - 10.0).max(20.0))
        .with_lightness((seed.l - 10.0).max(20.0));

    // Complement, 20 points saturated and lightened, capped at 80.
    let accent = seed
        .complement()
        .with_saturation((seed.s + 20.0).min(80.0))
        .with_lightness((seed.l + 20.0).min(80.0));

    Ok(BrandPalette {
        primary: seed,
        secondary,
        accent,
        neutral: NeutralScale::derive(seed),
        // Fixed semantic colors, independent of the seed, so status
        // colors keep their meaning across every generated brand.
        success: Hsl::from_rgb8(0x10, 0xb9, 0x81),
        warning: Hsl::from_rgb8(0xf5, 0x9e, 0x0b),
        error: Hsl::from_rgb8(0xef, 0x44, 0x44),
        info: Hsl::from_rgb8(0x3b, 0x82, 0xf6),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primary_is_the_seed() {
        let p = generate_palette("#3b82f6").unwrap();
        assert_eq!(p.primary, Hsl::from_hex("#3b82f6").unwrap());
    }

    #[test]
    fn deterministic() {
        let a = generate_palette("#8b5cf6").unwrap();
        let b = generate_palette("#8b5cf6").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn secondary_hue_is_seed_plus_30() {
        let seed = Hsl::from_hex("#10b981").unwrap();
        let p = generate_palette("#10b981").unwrap();
        // Recover the hue through a full hex round-trip.
        let recovered = Hsl::from_hex(&p.secondary.to_hex()).unwrap();
        let expected = (seed.h + 30.0) % 360.0;
        assert!(
            (recovered.h - expected).abs() < 1.5,
            "recovered {} expected {}",
            recovered.h,
            expected
        );
    }

    #[test]
    fn secondary_floors_engage_for_dark_gray_seeds() {
        let p = generate_palette("#1a1a1d").unwrap();
        assert!(p.secondary.s >= 20.0, "s = {}", p.secondary.s);
        assert!(p.secondary.l >= 20.0, "l = {}", p.secondary.l);
    }

    #[test]
    fn accent_is_capped_complement() {
        let seed = Hsl::from_hex("#f59e0b").unwrap();
        let p = generate_palette("#f59e0b").unwrap();
        let expected = (seed.h + 180.0) % 360.0;
        assert!((p.accent.h - expected).abs() < 0.01);
        assert!(p.accent.s <= 80.0, "s = {}", p.accent.s);
        assert!(p.accent.l <= 80.0, "l = {}", p.accent.l);
    }

    #[test]
    fn accent_hue_wraps() {
        // Seed hue past 180° — the complement must wrap into [0, 360).
        let p = generate_palette("#3b82f6").unwrap();
        assert!(p.accent.h >= 0.0 && p.accent.h < 360.0);
    }

    #[test]
    fn neutral_lightness_strictly_decreases() {
        let p = generate_palette("#3b82f6").unwrap();
        let lightness: Vec<f32> = p.neutral.iter().map(|s| s.color.l).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] > pair[1], "not decreasing: {pair:?}");
        }
    }

    #[test]
    fn neutral_shares_seed_hue_desaturated() {
        let seed = Hsl::from_hex("#ef4444").unwrap();
        let p = generate_palette("#ef4444").unwrap();
        for entry in p.neutral.iter() {
            assert!((entry.color.h - seed.h).abs() < 0.01);
            assert!(entry.color.s <= 20.0, "s = {}", entry.color.s);
        }
    }

    #[test]
    fn neutral_keeps_low_seed_saturation() {
        // Seed saturation below the cap passes through unchanged.
        let seed = Hsl::from_hex("#6b7280").unwrap();
        let p = generate_palette("#6b7280").unwrap();
        assert!((p.neutral.lightest().s - seed.s).abs() < 0.01);
    }

    #[test]
    fn neutral_stop_lookup() {
        let p = generate_palette("#3b82f6").unwrap();
        assert!((p.neutral.stop(500).unwrap().l - 40.0).abs() < f32::EPSILON);
        assert!(p.neutral.stop(450).is_none());
        assert!((p.neutral.lightest().l - 98.0).abs() < f32::EPSILON);
        assert!((p.neutral.darkest().l - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn semantic_colors_are_fixed() {
        let a = generate_palette("#10b981").unwrap();
        let b = generate_palette("#f43f5e").unwrap();
        assert_eq!(a.success, Hsl::from_hex("#10b981").unwrap());
        assert_eq!(a.warning, Hsl::from_hex("#f59e0b").unwrap());
        assert_eq!(a.error, Hsl::from_hex("#ef4444").unwrap());
        assert_eq!(a.info, Hsl::from_hex("#3b82f6").unwrap());
        assert_eq!(a.success, b.success);
        assert_eq!(a.warning, b.warning);
        assert_eq!(a.error, b.error);
        assert_eq!(a.info, b.info);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        assert!(generate_palette("not-a-color").is_err());
        assert!(generate_palette("10b981").is_err());
        assert!(generate_palette("#10b98").is_err());
        assert!(generate_palette("").is_err());
    }

    #[test]
    fn serde_round_trip_preserves_hex_values() {
        let p = generate_palette("#10b981").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: BrandPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back.primary.to_hex(), p.primary.to_hex());
        assert_eq!(back.neutral.darkest().to_hex(), p.neutral.darkest().to_hex());
        assert_eq!(back.success.to_hex(), "#10b981");
    }
}
