//! Gamut checks for RGB colors. Interpolation never clamps its results, so
//! these are left for callers that need real 8-bit channels.

use crate::{Channel, Rgb, CHANNEL_MAX};

fn in_channel_range(value: Channel) -> bool {
    (0..=CHANNEL_MAX).contains(&value)
}

impl Rgb {
    /// Return true if every channel is within `0..=255`.
    pub fn in_gamut(&self) -> bool {
        self.to_array().into_iter().all(in_channel_range)
    }

    /// Return a copy of the color with every channel clamped into `0..=255`.
    pub fn clamp_to_gamut(&self) -> Self {
        self.map(|c| c.clamp(0, CHANNEL_MAX))
    }

    /// Return the channels as bytes, or `None` if the color is out of gamut.
    pub fn to_bytes(&self) -> Option<[u8; 3]> {
        Some([
            u8::try_from(self.red).ok()?,
            u8::try_from(self.green).ok()?,
            u8::try_from(self.blue).ok()?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_gamut() {
        assert!(Rgb::new(0, 128, 255).in_gamut());
        assert!(!Rgb::new(-1, 128, 255).in_gamut());
        assert!(!Rgb::new(0, 128, 256).in_gamut());
    }

    #[test]
    fn clamp_to_gamut() {
        assert_eq!(Rgb::new(-20, 100, 300).clamp_to_gamut(), Rgb::new(0, 100, 255));
        assert_eq!(Rgb::new(1, 2, 3).clamp_to_gamut(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn to_bytes() {
        assert_eq!(Rgb::new(1, 2, 255).to_bytes(), Some([1, 2, 255]));
        assert_eq!(Rgb::new(1, 2, 256).to_bytes(), None);
        assert_eq!(Rgb::new(-1, 2, 3).to_bytes(), None);
    }
}
