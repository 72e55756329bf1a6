//! hexblend converts colors between hexadecimal, RGB and HSL notations and
//! produces interpolated color sequences between two endpoint colors.
//!
//! ```rust
//! use hexblend::{generate_color_sequence, Mode};
//!
//! let colors = generate_color_sequence("#000000", "#ffffff", 5, Mode::LinearRgb).unwrap();
//! assert_eq!(colors, ["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"]);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod gamut;
mod hsl;
mod interpolate;
mod math;
mod rgb;
mod sequence;

#[cfg(test)]
mod test;

pub use color::{Channel, Component, CHANNEL_MAX};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::{Error, Result};
pub use hsl::Hsl;
pub use interpolate::{
    interpolate_hsl, interpolate_rgb, Factor, Interpolation, Mode, Steps, DEFAULT_FACTOR,
};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
pub use sequence::generate_color_sequence;

/// Commonly used types, for glob importing.
pub mod prelude {
    pub use crate::{Component, Error, Hsl, Interpolation, Mode, Rgb};
}
