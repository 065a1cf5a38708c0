//! Theme application — pure mapping from a palette onto a theme record.
//!
//! The engine computes values and hands them back; it never writes them
//! anywhere. A consumer owns a [`Theme`], derives a new one with
//! [`Theme::with_palette`], and applies [`style_properties`] to whatever
//! rendering surface it has.

use serde::{Deserialize, Serialize};
use tinct_color::Hsl;

use crate::palette::BrandPalette;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named set of color slots a presentation layer styles itself with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name; untouched by palette application.
    pub name: String,
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    /// Page background (lightest neutral).
    pub background: Hsl,
    /// Card and panel background.
    pub surface: Hsl,
    /// Hairlines and dividers.
    pub border: Hsl,
    /// Main text (darkest neutral).
    pub text: Hsl,
    /// De-emphasized text.
    pub text_muted: Hsl,
    pub success: Hsl,
    pub warning: Hsl,
    pub error: Hsl,
    pub info: Hsl,
}

impl Theme {
    /// Return a copy with every color slot overridden from `palette`.
    ///
    /// Neutral stops map onto the surface slots: 50 → background,
    /// 100 → surface, 200 → border, 500 → muted text, 900 → text.
    /// `self` is left untouched; only `name` carries over.
    #[must_use]
    pub fn with_palette(&self, palette: &BrandPalette) -> Self {
        Self {
            name: self.name.clone(),
            primary: palette.primary,
            secondary: palette.secondary,
            accent: palette.accent,
            background: palette.neutral.lightest(),
            surface: palette.neutral.stops[1].color,
            border: palette.neutral.stops[2].color,
            text: palette.neutral.darkest(),
            text_muted: palette.neutral.stops[5].color,
            success: palette.success,
            warning: palette.warning,
            error: palette.error,
            info: palette.info,
        }
    }
}

impl Default for Theme {
    /// A plain light scheme — a valid starting record to override.
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            primary: Hsl::from_rgb8(0x3b, 0x82, 0xf6),
            secondary: Hsl::from_rgb8(0x64, 0x74, 0x8b),
            accent: Hsl::from_rgb8(0xf5, 0x9e, 0x0b),
            background: Hsl::WHITE,
            surface: Hsl::from_rgb8(0xf8, 0xfa, 0xfc),
            border: Hsl::from_rgb8(0xe2, 0xe8, 0xf0),
            text: Hsl::from_rgb8(0x0f, 0x17, 0x2a),
            text_muted: Hsl::from_rgb8(0x64, 0x74, 0x8b),
            success: Hsl::from_rgb8(0x10, 0xb9, 0x81),
            warning: Hsl::from_rgb8(0xf5, 0x9e, 0x0b),
            error: Hsl::from_rgb8(0xef, 0x44, 0x44),
            info: Hsl::from_rgb8(0x3b, 0x82, 0xf6),
        }
    }
}

// ---------------------------------------------------------------------------
// Style property export
// ---------------------------------------------------------------------------

/// Export a palette as CSS-custom-property pairs.
///
/// Ordered: primary/secondary/accent, the ten neutral stops lightest to
/// darkest, then the four semantic colors — 17 entries, values as
/// lowercase hex. Applying them to a document or widget tree is the
/// caller's job; the engine writes nothing anywhere.
#[must_use]
pub fn style_properties(palette: &BrandPalette) -> Vec<(String, String)> {
    let mut props = Vec::with_capacity(17);
    props.push(("--color-primary".to_owned(), palette.primary.to_hex()));
    props.push(("--color-secondary".to_owned(), palette.secondary.to_hex()));
    props.push(("--color-accent".to_owned(), palette.accent.to_hex()));
    for entry in palette.neutral.iter() {
        props.push((format!("--color-neutral-{}", entry.stop), entry.color.to_hex()));
    }
    props.push(("--color-success".to_owned(), palette.success.to_hex()));
    props.push(("--color-warning".to_owned(), palette.warning.to_hex()));
    props.push(("--color-error".to_owned(), palette.error.to_hex()));
    props.push(("--color-info".to_owned(), palette.info.to_hex()));
    props
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
