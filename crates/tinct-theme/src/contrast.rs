//! WCAG contrast checks over derived palettes.
//!
//! Luminance and ratio math per WCAG 2.1: luminance is a weighted sum of
//! linearized sRGB channels, and the ratio is symmetric under operand
//! order. Ratios map onto the usual conformance levels, with FAIL below
//! 3:1.

use serde::{Deserialize, Serialize};
use tinct_color::{Hsl, Result, parse_hex};

use crate::palette::BrandPalette;

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Linearize one 8-bit sRGB channel per WCAG 2.1.
fn channel_to_linear(c8: u8) -> f64 {
    let c = f64::from(c8) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of 8-bit channels per WCAG 2.1.
fn luminance_rgb8(r: u8, g: u8, b: u8) -> f64 {
    0.2126_f64.mul_add(
        channel_to_linear(r),
        0.7152_f64.mul_add(channel_to_linear(g), 0.0722 * channel_to_linear(b)),
    )
}

fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Hsl) -> f64 {
    let (r, g, b) = color.to_rgb8();
    luminance_rgb8(r, g, b)
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, so the result does not
/// depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Hsl, b: Hsl) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

// ---------------------------------------------------------------------------
// ContrastResult
// ---------------------------------------------------------------------------

/// WCAG conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContrastLevel {
    /// Ratio ≥ 7.0 — enhanced contrast.
    Aaa,
    /// Ratio ≥ 4.5 — minimum for normal text.
    Aa,
    /// Ratio ≥ 3.0 — large text only.
    A,
    /// Ratio < 3.0.
    Fail,
}

impl ContrastLevel {
    /// Classify a ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// Conventional display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "FAIL",
        }
    }
}

/// The outcome of one contrast check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Luminance ratio, ≥ 1.0.
    pub ratio: f64,
    /// Conformance level for the ratio.
    pub level: ContrastLevel,
}

/// Check the contrast between two hex colors.
///
/// Channels are taken straight from the parsed hex digits, so the ratio
/// depends only on the two inputs.
///
/// # Errors
///
/// Returns [`tinct_color::ColorError::InvalidColorFormat`] if either
/// input is malformed.
pub fn check_contrast(hex_a: &str, hex_b: &str) -> Result<ContrastResult> {
    let (ra, ga, ba) = parse_hex(hex_a)?;
    let (rb, gb, bb) = parse_hex(hex_b)?;
    let ratio = ratio_from_luminance(luminance_rgb8(ra, ga, ba), luminance_rgb8(rb, gb, bb));
    Ok(ContrastResult {
        ratio,
        level: ContrastLevel::from_ratio(ratio),
    })
}

// ---------------------------------------------------------------------------
// Accessibility report
// ---------------------------------------------------------------------------

/// Result of running the fixed contrast checks over a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    /// True when every check passed.
    pub is_valid: bool,
    /// One entry per failed check, in check order.
    pub issues: Vec<String>,
    /// One remedy per failed check, in check order.
    pub suggestions: Vec<String>,
}

/// One foreground/background pair to verify.
struct ContrastCheck {
    fg: Hsl,
    bg: Hsl,
    issue: &'static str,
    suggestion: &'static str,
}

/// Run the fixed contrast checks over a palette.
///
/// A check fails when its pair rates [`ContrastLevel::Fail`]; each
/// failure appends one issue and one matching suggestion. Extending the
/// check set is an internal change — the report shape stays the same.
#[must_use]
pub fn validate_accessibility(palette: &BrandPalette) -> AccessibilityReport {
    let checks = [
        ContrastCheck {
            fg: palette.primary,
            bg: Hsl::WHITE,
            issue: "Primary color has insufficient contrast against white",
            suggestion: "Darken the primary color for readability on light backgrounds",
        },
        ContrastCheck {
            fg: palette.neutral.darkest(),
            bg: palette.neutral.lightest(),
            issue: "Text and background neutrals have insufficient contrast",
            suggestion: "Widen the lightness spread between the darkest and lightest neutrals",
        },
    ];

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    for check in &checks {
        let ratio = contrast_ratio(check.fg, check.bg);
        if ContrastLevel::from_ratio(ratio) == ContrastLevel::Fail {
            issues.push(check.issue.to_owned());
            suggestions.push(check.suggestion.to_owned());
        }
    }

    AccessibilityReport {
        is_valid: issues.is_empty(),
        issues,
        suggestions,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate_palette;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Luminance ───────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx(relative_luminance(Hsl::BLACK), 0.0, 0.001));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx(relative_luminance(Hsl::WHITE), 1.0, 0.001));
    }

    #[test]
    fn luminance_channel_weights() {
        let green = Hsl::from_hex("#00ff00").unwrap();
        assert!(approx(relative_luminance(green), 0.7152, 0.001));
        let red = Hsl::from_hex("#ff0000").unwrap();
        assert!(approx(relative_luminance(red), 0.2126, 0.001));
    }

    // ── Ratio and levels ────────────────────────────────────────────

    #[test]
    fn black_on_white_is_21_aaa() {
        let result = check_contrast("#000000", "#ffffff").unwrap();
        assert!(approx(result.ratio, 21.0, 0.01), "ratio = {}", result.ratio);
        assert_eq!(result.level, ContrastLevel::Aaa);
    }

    #[test]
    fn same_color_is_one() {
        let result = check_contrast("#3b82f6", "#3b82f6").unwrap();
        assert!(approx(result.ratio, 1.0, 0.001));
        assert_eq!(result.level, ContrastLevel::Fail);
    }

    #[test]
    fn ratio_is_symmetric() {
        for (a, b) in [
            ("#10b981", "#111827"),
            ("#f59e0b", "#ffffff"),
            ("#3b82f6", "#ef4444"),
        ] {
            let ab = check_contrast(a, b).unwrap();
            let ba = check_contrast(b, a).unwrap();
            assert!(approx(ab.ratio, ba.ratio, 1e-9), "{a}/{b}");
            assert_eq!(ab.level, ba.level);
        }
    }

    #[test]
    fn ratio_symmetric_through_hsl_path() {
        let a = Hsl::from_hex("#8a2be2").unwrap();
        let b = Hsl::from_hex("#fafafa").unwrap();
        assert!(approx(contrast_ratio(a, b), contrast_ratio(b, a), 1e-9));
    }

    #[test]
    fn gray_on_white_is_aa() {
        // colord's reference pair: 4.54:1.
        let result = check_contrast("#767676", "#ffffff").unwrap();
        assert!(approx(result.ratio, 4.54, 0.05), "ratio = {}", result.ratio);
        assert_eq!(result.level, ContrastLevel::Aa);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(ContrastLevel::from_ratio(21.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(6.99), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.49), ContrastLevel::A);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::A);
        assert_eq!(ContrastLevel::from_ratio(2.99), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Fail);
    }

    #[test]
    fn level_names() {
        assert_eq!(ContrastLevel::Aaa.name(), "AAA");
        assert_eq!(ContrastLevel::Fail.name(), "FAIL");
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(check_contrast("#000000", "fff").is_err());
        assert!(check_contrast("black", "#ffffff").is_err());
    }

    // ── Accessibility report ────────────────────────────────────────

    #[test]
    fn yellow_seed_fails_primary_on_white() {
        let palette = generate_palette("#ffff00").unwrap();
        let report = validate_accessibility(&palette);
        assert!(!report.is_valid);
        assert!(!report.issues.is_empty());
        assert_eq!(report.issues.len(), report.suggestions.len());
        assert!(report.issues[0].contains("white"));
    }

    #[test]
    fn dark_seed_passes() {
        let palette = generate_palette("#1d4ed8").unwrap();
        let report = validate_accessibility(&palette);
        assert!(report.is_valid, "issues: {:?}", report.issues);
        assert!(report.issues.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn neutral_extremes_always_pass_for_derived_palettes() {
        // The fixed lightness ladder (98 vs 10) keeps the second check
        // comfortably above the 3:1 floor for any seed.
        for seed in ["#ffff00", "#000000", "#ff00ff", "#123456"] {
            let palette = generate_palette(seed).unwrap();
            let ratio = contrast_ratio(palette.neutral.darkest(), palette.neutral.lightest());
            assert!(ratio >= 3.0, "{seed}: {ratio}");
        }
    }

    #[test]
    fn report_serializes() {
        let palette = generate_palette("#ffff00").unwrap();
        let report = validate_accessibility(&palette);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"is_valid\":false"));
    }
}
