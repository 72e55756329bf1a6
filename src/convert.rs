//! Conversions between the RGB and HSL notations.
//!
//! Both directions operate on the three color components only. Values are not
//! clamped, so extrapolated RGB colors convert to (and from) HSL components
//! outside their usual ranges.

use crate::{Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self.to_array()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(self.to_array()).into()
    }
}

/// Convert a color from RGB channels to the HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert a color from the HSL notation to RGB channels.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

mod util {
    use crate::{
        math::{normalize_channel, to_channel},
        Channel, Component,
    };

    const ONE_SIXTH: Component = 1.0 / 6.0;
    const ONE_THIRD: Component = 1.0 / 3.0;
    const ONE_HALF: Component = 1.0 / 2.0;
    const TWO_THIRDS: Component = 2.0 / 3.0;

    /// Convert from RGB channels to HSL components.
    pub fn rgb_to_hsl(from: [Channel; 3]) -> [Component; 3] {
        let [red, green, blue] = from.map(normalize_channel);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            return [0.0, 0.0, lightness];
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Ties for the maximum resolve in red, green, blue order.
        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        [hue / 6.0, saturation, lightness]
    }

    /// Return the value of one channel for a hue offset `t`, where `p` and `q`
    /// are the low and high bounds derived from saturation and lightness.
    fn hue_to_channel(p: Component, q: Component, mut t: Component) -> Component {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < ONE_SIXTH {
            p + (q - p) * 6.0 * t
        } else if t < ONE_HALF {
            q
        } else if t < TWO_THIRDS {
            p + (q - p) * (TWO_THIRDS - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL components to RGB channels.
    pub fn hsl_to_rgb(from: [Component; 3]) -> [Channel; 3] {
        let [hue, saturation, lightness] = from;

        if saturation == 0.0 {
            return [to_channel(lightness); 3];
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        [hue + ONE_THIRD, hue, hue - ONE_THIRD].map(|t| to_channel(hue_to_channel(p, q, t)))
    }
}
