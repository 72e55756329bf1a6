use log::{debug, trace};

use crate::{Mode, Result, Rgb};

/// Generate `steps` colors in hex notation, going from the color `from` to the
/// color `to`, blended with the given mode.
///
/// The first entry is `from` and the last entry is `to` (normalized to
/// lowercase `#rrggbb`). Fails if either color is not valid hex notation or if
/// fewer than 2 steps are requested.
pub fn generate_color_sequence(
    from: &str,
    to: &str,
    steps: usize,
    mode: Mode,
) -> Result<Vec<String>> {
    let left: Rgb = from.parse()?;
    let right: Rgb = to.parse()?;

    debug!("generating {steps} colors from {left} to {right} in {mode}");

    let colors = left
        .interpolate(&right, mode)
        .steps(steps)?
        .enumerate()
        .map(|(i, color)| {
            trace!("step {i}: {color:?}");
            color.to_hex()
        })
        .collect();

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn black_to_white() {
        let colors = generate_color_sequence("#000000", "#ffffff", 5, Mode::LinearRgb).unwrap();
        assert_eq!(
            colors,
            ["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"]
        );
    }

    #[test]
    fn grayscale_is_monotonic() {
        for mode in [Mode::LinearRgb, Mode::Hsl] {
            let colors = generate_color_sequence("000000", "FFFFFF", 17, mode).unwrap();
            assert_eq!(colors.len(), 17);

            let channels = colors
                .iter()
                .map(|hex| Rgb::from_hex(hex).unwrap().to_array())
                .collect::<Vec<_>>();
            for pair in channels.windows(2) {
                for c in 0..3 {
                    assert!(pair[0][c] <= pair[1][c], "{:?}", colors);
                }
            }
        }
    }

    #[test]
    fn endpoints_are_kept() {
        for mode in [Mode::LinearRgb, Mode::Hsl] {
            let colors = generate_color_sequence("#FF0000", "#0000ff", 7, mode).unwrap();
            assert_eq!(colors.len(), 7);
            assert_eq!(colors.first().map(String::as_str), Some("#ff0000"));
            assert_eq!(colors.last().map(String::as_str), Some("#0000ff"));
        }
    }

    #[test]
    fn two_steps_are_the_endpoints() {
        let colors = generate_color_sequence("#d2691e", "#008080", 2, Mode::LinearRgb).unwrap();
        assert_eq!(colors, ["#d2691e", "#008080"]);
    }

    #[test]
    fn hsl_sequence_goes_around_the_wheel() {
        let colors = generate_color_sequence("#ff0000", "#0000ff", 3, Mode::Hsl).unwrap();
        assert_eq!(colors, ["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn too_few_steps() {
        assert_eq!(
            generate_color_sequence("#000000", "#ffffff", 1, Mode::LinearRgb),
            Err(Error::TooFewSteps(1))
        );
        assert_eq!(
            generate_color_sequence("#000000", "#ffffff", 0, Mode::Hsl),
            Err(Error::TooFewSteps(0))
        );
    }

    #[test]
    fn invalid_endpoints() {
        assert_eq!(
            generate_color_sequence("#000", "#ffffff", 3, Mode::LinearRgb),
            Err(Error::InvalidHex("#000".to_string()))
        );
        assert_eq!(
            generate_color_sequence("#000000", "white", 3, Mode::LinearRgb),
            Err(Error::InvalidHex("white".to_string()))
        );
    }
}
