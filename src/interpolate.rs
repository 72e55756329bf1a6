//! Interpolation between two RGB colors, either directly on the channels or
//! through the HSL notation.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::{math::round_half_up, Channel, Component, Error, Hsl, Result, Rgb};

/// The factor used when an interpolation is requested without one.
pub const DEFAULT_FACTOR: Component = 0.5;

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// The strategy used to blend two colors.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Blend each RGB channel independently.
    #[default]
    LinearRgb,
    /// Convert both colors to HSL, blend each HSL component and convert the
    /// result back to RGB. Hues are blended on their raw values, without
    /// taking the shortest path around the color wheel.
    Hsl,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" | "linear-rgb" => Ok(Mode::LinearRgb),
            "hsl" => Ok(Mode::Hsl),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::LinearRgb => "rgb",
            Mode::Hsl => "hsl",
        })
    }
}

/// An interpolation factor. `0` yields the first color and `1` the second.
/// Values outside of that range extrapolate and are not clamped.
///
/// Any function taking a factor accepts a [`Component`], or an
/// `Option<Component>` where `None` selects [`DEFAULT_FACTOR`]:
/// ```rust
/// use hexblend::{interpolate_rgb, Rgb};
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// assert_eq!(
///     interpolate_rgb(black, white, None),
///     interpolate_rgb(black, white, 0.5),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor(Component);

impl Factor {
    /// Return the value of the factor.
    pub fn value(&self) -> Component {
        self.0
    }

    /// Return the value of the factor if it is finite.
    fn checked(self) -> Result<Component> {
        if self.0.is_finite() {
            Ok(self.0)
        } else {
            Err(Error::NonFiniteFactor(self.0))
        }
    }
}

impl Default for Factor {
    fn default() -> Self {
        Self(DEFAULT_FACTOR)
    }
}

impl From<Component> for Factor {
    fn from(value: Component) -> Self {
        Self(value)
    }
}

impl From<Option<Component>> for Factor {
    fn from(value: Option<Component>) -> Self {
        value.map(Self).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Endpoints {
    Rgb(Rgb, Rgb),
    Hsl(Hsl, Hsl),
}

/// Two colors prepared for blending in a specific [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    endpoints: Endpoints,
}

impl Rgb {
    /// Prepare an interpolation from this color to another, using the given
    /// mode.
    pub fn interpolate(&self, other: &Self, mode: Mode) -> Interpolation {
        let endpoints = match mode {
            Mode::LinearRgb => Endpoints::Rgb(*self, *other),
            Mode::Hsl => Endpoints::Hsl(self.to_hsl(), other.to_hsl()),
        };
        Interpolation { endpoints }
    }
}

impl Interpolation {
    /// Return the mode the colors are blended in.
    pub fn mode(&self) -> Mode {
        match self.endpoints {
            Endpoints::Rgb(..) => Mode::LinearRgb,
            Endpoints::Hsl(..) => Mode::Hsl,
        }
    }

    /// Return the color at the given factor between the two endpoints.
    pub fn at(&self, factor: impl Into<Factor>) -> Result<Rgb> {
        let t = factor.into().checked()?;
        Ok(self.blend(t))
    }

    /// Return an iterator over `count` evenly spaced colors, starting with the
    /// first endpoint and ending with the second. At least 2 steps are
    /// required.
    pub fn steps(&self, count: usize) -> Result<Steps> {
        if count < 2 {
            return Err(Error::TooFewSteps(count));
        }

        Ok(Steps {
            interpolation: *self,
            increment: 1.0 / (count - 1) as Component,
            next: 0,
            count,
        })
    }

    fn blend(&self, t: Component) -> Rgb {
        match self.endpoints {
            Endpoints::Rgb(left, right) => {
                let (left, right) = (left.to_array(), right.to_array());
                Rgb::from([0, 1, 2].map(|i| {
                    round_half_up(lerp(
                        left[i] as Component,
                        right[i] as Component,
                        t,
                    )) as Channel
                }))
            }
            Endpoints::Hsl(left, right) => {
                let (left, right) = (left.to_array(), right.to_array());
                Hsl::from([0, 1, 2].map(|i| lerp(left[i], right[i], t))).to_rgb()
            }
        }
    }
}

/// Iterator over evenly spaced colors of an [`Interpolation`], created with
/// [`Interpolation::steps`].
#[derive(Clone, Debug)]
pub struct Steps {
    interpolation: Interpolation,
    increment: Component,
    next: usize,
    count: usize,
}

impl Iterator for Steps {
    type Item = Rgb;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let t = self.next as Component * self.increment;
        self.next += 1;
        Some(self.interpolation.blend(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

/// Blend each RGB channel of two colors. `factor` defaults to `0.5` when
/// `None` is passed.
pub fn interpolate_rgb(left: Rgb, right: Rgb, factor: impl Into<Factor>) -> Result<Rgb> {
    left.interpolate(&right, Mode::LinearRgb).at(factor)
}

/// Blend two colors through the HSL notation. `factor` defaults to `0.5` when
/// `None` is passed.
pub fn interpolate_hsl(left: Rgb, right: Rgb, factor: impl Into<Factor>) -> Result<Rgb> {
    left.interpolate(&right, Mode::Hsl).at(factor)
}
