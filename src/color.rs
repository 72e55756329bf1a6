//! Scalar types shared by all color models.

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that HSL components and interpolation
/// factors are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that HSL components and interpolation
/// factors are stored as.
pub type Component = f32;

/// An integer RGB channel. Channels of valid colors are in `0..=255`, but
/// extrapolation can produce values outside that range, so the type is wider
/// and signed.
pub type Channel = i32;

/// The largest value of a channel that is within gamut.
pub const CHANNEL_MAX: Channel = 255;
