//! Print a sequence of colors blended between two hex colors and optionally
//! render it as a strip of swatches.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use hexblend::{Mode, Rgb};
use image::{Rgb as Pixel, RgbImage};
use log::info;

/// Upper bound on the number of pixels in a rendered strip.
const MAX_PIXELS: u64 = 1 << 28;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The first color, as #RRGGBB.
    #[arg(value_parser = str::parse::<Rgb>)]
    from: Rgb,

    /// The last color, as #RRGGBB.
    #[arg(value_parser = str::parse::<Rgb>)]
    to: Rgb,

    /// Number of colors to generate, including both endpoints.
    #[arg(short, long, default_value_t = 10)]
    steps: usize,

    /// How the colors are blended: `rgb` (or `linear-rgb`) or `hsl`.
    #[arg(short, long, default_value_t = Mode::LinearRgb, value_parser = str::parse::<Mode>)]
    mode: Mode,

    /// Write the colors as a PNG strip of swatches.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Edge length of each swatch in pixels.
    #[arg(long, default_value_t = 32)]
    swatch: u32,
}

/// Render one square swatch per color, left to right. Out of gamut colors are
/// clamped.
fn render_strip(colors: &[Rgb], swatch: u32) -> Result<RgbImage, Box<dyn Error>> {
    if swatch == 0 {
        return Err("swatch size must be at least 1 pixel".into());
    }

    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|count| count.checked_mul(swatch))
        .filter(|&width| u64::from(width) * u64::from(swatch) <= MAX_PIXELS)
        .ok_or_else(|| {
            format!(
                "a strip of {} swatches of {swatch} pixels is too large",
                colors.len()
            )
        })?;

    let pixels = colors
        .iter()
        .map(|color| {
            let [r, g, b] = color.clamp_to_gamut().to_array();
            Pixel([r as u8, g as u8, b as u8])
        })
        .collect::<Vec<_>>();

    let mut image = RgbImage::new(width, swatch);
    for (x, _, pixel) in image.enumerate_pixels_mut() {
        *pixel = pixels[(x / swatch) as usize];
    }
    Ok(image)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let colors = cli
        .from
        .interpolate(&cli.to, cli.mode)
        .steps(cli.steps)?
        .collect::<Vec<_>>();
    for color in &colors {
        println!("{color}");
    }

    if let Some(path) = cli.output {
        render_strip(&colors, cli.swatch)?.save(&path)?;
        info!("wrote {} swatches to {}", colors.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_has_one_swatch_per_color() {
        let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
        let image = render_strip(&colors, 4).unwrap();
        assert_eq!(image.dimensions(), (8, 4));
        assert_eq!(*image.get_pixel(3, 3), Pixel([255, 0, 0]));
        assert_eq!(*image.get_pixel(4, 0), Pixel([0, 0, 255]));
    }

    #[test]
    fn out_of_gamut_colors_are_clamped() {
        let image = render_strip(&[Rgb::new(-40, 128, 300)], 1).unwrap();
        assert_eq!(*image.get_pixel(0, 0), Pixel([0, 128, 255]));
    }

    #[test]
    fn zero_swatch_is_rejected() {
        assert!(render_strip(&[Rgb::new(0, 0, 0)], 0).is_err());
    }

    #[test]
    fn oversized_strips_are_rejected() {
        let two = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        // Width overflows u32.
        assert!(render_strip(&two, u32::MAX).is_err());
        // Width fits but the pixel count is too large to allocate.
        assert!(render_strip(&two, 1 << 16).is_err());

        let many = vec![Rgb::new(0, 0, 0); 100_000];
        assert!(render_strip(&many, 64).is_err());
    }

    #[test]
    fn mode_accepts_every_name() {
        for (name, mode) in [
            ("rgb", Mode::LinearRgb),
            ("linear-rgb", Mode::LinearRgb),
            ("hsl", Mode::Hsl),
        ] {
            let cli = Cli::try_parse_from(["gradient", "#000000", "#ffffff", "-m", name]).unwrap();
            assert_eq!(cli.mode, mode);
        }
        assert!(Cli::try_parse_from(["gradient", "#000000", "#ffffff", "-m", "lab"]).is_err());
    }

    #[test]
    fn endpoints_are_parsed_as_hex() {
        let cli = Cli::try_parse_from(["gradient", "d2691e", "#008080"]).unwrap();
        assert_eq!(cli.from, Rgb::new(210, 105, 30));
        assert_eq!(cli.to, Rgb::new(0, 128, 128));
        assert!(Cli::try_parse_from(["gradient", "#fff", "#008080"]).is_err());
    }
}
