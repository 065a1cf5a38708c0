// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced when constructing colors from caller-supplied input.
///
/// All errors originate at input-validation time. Derived color math
/// never fails: derived components are clamped because they are
/// mathematically guaranteed to stay in range. Recovering from a bad
/// input (substituting a default color, re-prompting) is the caller's
/// decision, never the engine's.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input was not `#` followed by exactly six hexadecimal digits.
    #[error("invalid color format {0:?}: expected \"#rrggbb\"")]
    InvalidColorFormat(String),

    /// An HSL component passed to a constructor was outside its range.
    #[error("{component} out of range: {value} (allowed {min} to {max})")]
    OutOfRangeComponent {
        component: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Convenience alias used across the engine crates.
pub type Result<T> = std::result::Result<T, ColorError>;
