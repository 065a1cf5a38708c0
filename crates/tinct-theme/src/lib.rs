//! # tinct-theme — deterministic brand palette derivation
//!
//! Derives a complete brand palette, five color-theory harmonies, and a
//! WCAG contrast assessment from one seed color. Everything is a pure
//! function of its inputs: same seed, same output, every time.
//!
//! # Architecture
//!
//! ```text
//! seed "#rrggbb"
//!     │
//!     ▼
//! tinct-color:  strict parse → Hsl (hue/saturation/lightness)
//!     │
//!     ├──▶ palette.rs:  brand roles + 10-stop neutral scale + semantics
//!     │        │
//!     │        ▼
//!     │    contrast.rs: WCAG luminance, ratios, accessibility report
//!     │
//!     ├──▶ harmony.rs:  five fixed hue-wheel relationships
//!     │
//!     └──▶ theme.rs:    apply a palette onto a theme record / CSS export
//! ```
//!
//! No component holds state, performs I/O, or touches anything global.
//! The engine only computes values; applying them to a rendering surface
//! is the caller's job.

// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod contrast;
pub mod harmony;
pub mod palette;
pub mod theme;

pub use contrast::{
    AccessibilityReport, ContrastLevel, ContrastResult, check_contrast, contrast_ratio,
    relative_luminance, validate_accessibility,
};
pub use harmony::{ColorHarmony, HarmonyKind, generate_harmonies};
pub use palette::{BrandPalette, NeutralScale, NeutralStop, generate_palette};
pub use theme::{Theme, style_properties};
