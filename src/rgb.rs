//! Model a color with integer red, green and blue channels, and its
//! hexadecimal notation.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::{Channel, Error};

hexblend_macros::gen_model! {
    /// A color specified with red, green and blue channels. Channels of
    /// colors within gamut are in `0..=255`.
    #[derive(Default, Eq, Hash)]
    pub struct Rgb {
        /// The red channel of the color.
        red: Channel,
        /// The green channel of the color.
        green: Channel,
        /// The blue channel of the color.
        blue: Channel,
    }
}

impl Rgb {
    /// Parse a color in the `#RRGGBB` or `RRGGBB` notation. Digits are case
    /// insensitive. Any other input, including the 3 digit shorthand and
    /// notations with an alpha channel, returns `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .ok()
                .map(Channel::from)
        };

        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format the color in the `#rrggbb` notation with lowercase digits.
    ///
    /// Channels are expected to be within gamut. Channels outside of it are
    /// not guarded against and produce a malformed string.
    pub fn to_hex(&self) -> String {
        if !self.in_gamut() {
            warn!("formatting out of gamut color {:?} as hex", self);
        }
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Parse a color in the `#RRGGBB` or `RRGGBB` notation, returning `None` if
/// the string does not match.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

/// Format a color in the `#rrggbb` notation.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidHex(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
