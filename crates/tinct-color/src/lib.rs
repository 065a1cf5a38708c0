// SPDX-License-Identifier: MIT
//
// tinct-color — HSL-native color support for the tinct derivation engine.
//
// The leaf crate: everything else in the workspace derives colors by
// doing hue/saturation/lightness arithmetic on the Hsl type defined
// here. Parsing is strict and fail-fast — callers get a typed error,
// never a silently coerced color. The derivation helpers clamp instead,
// because derived components are mathematically guaranteed in range.

// Single-char variable names (r, g, b, h, s, l, p, q, t) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Channel max/min comparisons are exact copies of the channel values.
#![allow(clippy::float_cmp)]
// Channel quantization rounds into 0..=255 before the cast.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod color;
pub mod error;

pub use color::{Hsl, normalize_hue, parse_hex};
pub use error::{ColorError, Result};
