//! Model a color with the HSL notation.

use crate::Component;

hexblend_macros::gen_model! {
    /// A color specified with the HSL notation. All components are fractions:
    /// the hue is a fraction of a full turn in `[0, 1)`, saturation and
    /// lightness are in `[0, 1]`.
    pub struct Hsl {
        /// The hue component of the color.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Return true if the color has no hue, i.e. it is a shade of gray.
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}
