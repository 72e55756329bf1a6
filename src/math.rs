//! Math utility functions.

use crate::{Channel, Component, CHANNEL_MAX};

/// Round to the nearest integer, with halves rounded towards positive
/// infinity (`-2.5` rounds to `-2`, `2.5` rounds to `3`).
pub fn round_half_up(value: Component) -> Component {
    (value + 0.5).floor()
}

/// Scale a value in the `[0, 1]` range to a rounded channel value.
pub fn to_channel(value: Component) -> Channel {
    round_half_up(value * CHANNEL_MAX as Component) as Channel
}

/// Scale a channel to the `[0, 1]` range.
pub fn normalize_channel(channel: Channel) -> Component {
    channel as Component / CHANNEL_MAX as Component
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn channels_scale_to_255() {
        assert_eq!(to_channel(0.0), 0);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(normalize_channel(255), 1.0);
        assert_eq!(normalize_channel(0), 0.0);
    }
}
