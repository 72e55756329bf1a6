use thiserror::Error;

use crate::Component;

/// Errors returned when an operation receives input it can not work with.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The string does not match the `#RRGGBB` or `RRGGBB` notation.
    #[error("invalid hex color `{0}`, expected #RRGGBB")]
    InvalidHex(String),

    /// A color sequence was requested with fewer than 2 steps.
    #[error("a color sequence needs at least 2 steps, got {0}")]
    TooFewSteps(usize),

    /// An interpolation factor is NaN or infinite.
    #[error("interpolation factor must be finite, got {0}")]
    NonFiniteFactor(Component),

    /// The name does not match any interpolation mode.
    #[error("unknown interpolation mode `{0}`, expected `rgb` or `hsl`")]
    UnknownMode(String),
}

/// A result with the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
