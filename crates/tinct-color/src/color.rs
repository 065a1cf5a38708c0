// SPDX-License-Identifier: MIT
//
// HSL color type and hex conversion.
//
// HSL is the engine's working representation — every derivation rule is
// hue/saturation/lightness arithmetic. Hex is the interchange format:
// seed colors arrive as "#rrggbb" strings and every exported value
// renders back to one.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// Hue is an angle in degrees, saturation and lightness are percentages.
/// The components are plain public fields; [`Hsl::new`] validates caller
/// input, while internal derivation builds values directly because the
/// arithmetic keeps them in range.
///
/// # Examples
///
/// ```
/// use tinct_color::Hsl;
///
/// let teal = Hsl::from_hex("#10b981")?;
/// assert!((teal.h - 160.1).abs() < 0.5);
///
/// // Hue-wheel operations wrap; lightness operations clamp.
/// let opposite = teal.complement();
/// assert!((opposite.h - 340.1).abs() < 0.5);
/// assert_eq!(teal.lighten(200.0).l, 100.0);
/// # Ok::<(), tinct_color::ColorError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Hsl {
    /// Hue angle in degrees, normalized to [0, 360).
    pub h: f32,
    /// Saturation percentage: 0 (gray) to 100 (fully saturated).
    pub s: f32,
    /// Lightness percentage: 0 (black) to 100 (white).
    pub l: f32,
}

impl Hsl {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an HSL color from validated components.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRangeComponent`] if `h` is outside
    /// `[0, 360)` or `s`/`l` are outside `[0, 100]`. Caller input is
    /// never coerced into range.
    pub fn new(h: f32, s: f32, l: f32) -> Result<Self> {
        if !(0.0..360.0).contains(&h) {
            return Err(ColorError::OutOfRangeComponent {
                component: "hue",
                value: h,
                min: 0.0,
                max: 360.0,
            });
        }
        if !(0.0..=100.0).contains(&s) {
            return Err(ColorError::OutOfRangeComponent {
                component: "saturation",
                value: s,
                min: 0.0,
                max: 100.0,
            });
        }
        if !(0.0..=100.0).contains(&l) {
            return Err(ColorError::OutOfRangeComponent {
                component: "lightness",
                value: l,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(Self { h, s, l })
    }

    /// Parse a `#rrggbb` hex color (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input is `#`
    /// followed by exactly six hexadecimal digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let (r, g, b) = parse_hex(s)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Convert 8-bit sRGB channels to HSL.
    ///
    /// Lightness is the mid-range of the channels; saturation scales the
    /// channel spread by how far lightness sits from mid-gray; hue comes
    /// from the standard 60°-per-segment formula, keyed on whichever
    /// channel is largest.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r = f32::from(r) / 255.0;
        let g = f32::from(g) / 255.0;
        let b = f32::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            // Achromatic — hue is undefined, default to 0.
            return Self { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: normalize_hue(h * 60.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Pure white.
    pub const WHITE: Self = Self { h: 0.0, s: 0.0, l: 100.0 };

    /// Pure black.
    pub const BLACK: Self = Self { h: 0.0, s: 0.0, l: 0.0 };

    /// Whether this color has no visible hue.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-4
    }

    // ─── Derivation helpers ──────────────────────────────────────────────
    //
    // Hue operations wrap around the wheel; saturation and lightness
    // operations clamp to [0, 100].

    /// Increase lightness by `amount` percentage points.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Decrease lightness by `amount` percentage points.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Set lightness to an absolute value.
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Increase saturation by `amount` percentage points.
    #[inline]
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        Self {
            s: (self.s + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Decrease saturation by `amount` percentage points.
    #[inline]
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        Self {
            s: (self.s - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Set saturation to an absolute value.
    #[inline]
    #[must_use]
    pub fn with_saturation(self, s: f32) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Shift the hue by `degrees`, wrapping around 360°.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// The complementary color (hue shifted 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to 8-bit sRGB channels.
    ///
    /// Uses the standard hue-interpolation construction; each channel is
    /// rounded to the nearest of the 256 representable values, so a full
    /// round-trip through hex is exact only to within ±1 per channel.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s <= 0.0 {
            let v = to_u8(l);
            return (v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0f32.mul_add(l, -q);

        (
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Render as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        // Compare with a small epsilon for floating point.
        const EPS: f32 = 1e-4;
        (self.l - other.l).abs() < EPS
            && (self.s - other.s).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Hsl {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// Colors serialize as their hex string — the interchange format every
// consumer of the engine already speaks.

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Hsl;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a \"#rrggbb\" hex color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Hsl, E> {
                Hsl::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
///
/// Negative angles are brought back onto the wheel before the wrap, so
/// `normalize_hue(-30.0)` is 330, not -30.
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Parse a `#rrggbb` string into 8-bit channels.
///
/// Strict by contract: exactly `#` plus six hex digits, case-insensitive.
/// Shorthand (`#rgb`) and alpha (`#rrggbbaa`) forms are rejected — every
/// hex value in the engine is a complete three-channel color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for anything else.
pub fn parse_hex(s: &str) -> Result<(u8, u8, u8)> {
    let invalid = || ColorError::InvalidColorFormat(s.to_owned());

    let digits = s.strip_prefix('#').ok_or_else(invalid)?.as_bytes();
    if digits.len() != 6 {
        return Err(invalid());
    }

    let r = parse_hex_byte(&digits[0..2]).ok_or_else(invalid)?;
    let g = parse_hex_byte(&digits[2..4]).ok_or_else(invalid)?;
    let b = parse_hex_byte(&digits[4..6]).ok_or_else(invalid)?;
    Ok((r, g, b))
}

fn parse_hex_byte(pair: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(pair[0])?;
    let lo = parse_hex_digit(pair[1])?;
    Some(hi << 4 | lo)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// One segment of the piecewise hue-interpolation function.
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// Quantize a unit channel value to u8 by rounding.
#[inline]
fn to_u8(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
