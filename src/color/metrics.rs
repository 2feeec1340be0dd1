//! Luminance, contrast ratio and light/dark classification
//!
//! Formulas follow the WCAG 2.x definition of relative luminance.

use super::conversion::hex_to_rgb;
use super::model::{ColorInfo, ColorType, RgbColor};
use super::error::ColorError;

/// Channel value at or below which the sRGB curve is linear
pub const LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance above which a color counts as light
pub const LIGHT_THRESHOLD: f64 = 0.5;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Relative luminance of an sRGB color, in `[0, 1]`
pub fn calculate_luminance(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * linearize(r) + GREEN_WEIGHT * linearize(g) + BLUE_WEIGHT * linearize(b)
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colors, from 1.0 up to 21.0
///
/// The result does not depend on argument order.
pub fn calculate_contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let lum_a = a.luminance();
    let lum_b = b.luminance();

    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);

    (lighter + 0.05) / (darker + 0.05)
}

/// Classify a color as light or dark
///
/// A luminance of exactly 0.5 is dark.
pub fn get_color_type(r: u8, g: u8, b: u8) -> ColorType {
    if calculate_luminance(r, g, b) > LIGHT_THRESHOLD {
        ColorType::Light
    } else {
        ColorType::Dark
    }
}

/// Parse `hex` and derive all of its representations and metrics
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is malformed.
pub fn get_color_info(hex: &str) -> Result<ColorInfo, ColorError> {
    hex_to_rgb(hex).map(ColorInfo::from_rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::model::{HexColor, HslColor};

    const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(calculate_luminance(0, 0, 0), 0.0);
        assert!((calculate_luminance(255, 255, 255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_reference_color() {
        let lum = calculate_luminance(52, 152, 219);
        assert!((lum - 0.283_010_102_042).abs() < 1e-9, "got {}", lum);
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 = 0.0392 is below the breakpoint
        let expected = (10.0 / 255.0) / 12.92;
        assert!((calculate_luminance(10, 10, 10) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_luminance_channel_weights() {
        let r = calculate_luminance(255, 0, 0);
        let g = calculate_luminance(0, 255, 0);
        let b = calculate_luminance(0, 0, 255);
        assert!((r - 0.2126).abs() < 1e-12);
        assert!((g - 0.7152).abs() < 1e-12);
        assert!((b - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = calculate_contrast_ratio(BLACK, WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "got {}", ratio);
    }

    #[test]
    fn test_contrast_identical_colors() {
        for rgb in [BLACK, WHITE, RgbColor::new(52, 152, 219)] {
            assert!((calculate_contrast_ratio(rgb, rgb) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let samples = [
            BLACK,
            WHITE,
            RgbColor::new(52, 152, 219),
            RgbColor::new(255, 107, 107),
            RgbColor::new(12, 10, 62),
            RgbColor::new(128, 128, 128),
        ];
        for a in samples {
            for b in samples {
                let ab = calculate_contrast_ratio(a, b);
                assert_eq!(ab, calculate_contrast_ratio(b, a));
                assert!((1.0..=21.0 + 1e-9).contains(&ab));
            }
        }
    }

    #[test]
    fn test_contrast_reference_color() {
        let blue = RgbColor::new(52, 152, 219);
        assert!((calculate_contrast_ratio(blue, BLACK) - 6.66).abs() < 0.01);
        assert!((calculate_contrast_ratio(blue, WHITE) - 3.15).abs() < 0.01);
    }

    #[test]
    fn test_color_type() {
        assert_eq!(get_color_type(52, 152, 219), ColorType::Dark);
        assert_eq!(get_color_type(0, 0, 0), ColorType::Dark);
        assert_eq!(get_color_type(255, 255, 255), ColorType::Light);
        assert_eq!(get_color_type(255, 255, 0), ColorType::Light);
        // Mid gray has luminance ~0.216
        assert_eq!(get_color_type(128, 128, 128), ColorType::Dark);
    }

    #[test]
    fn test_get_color_info() {
        let info = get_color_info("#3498db").unwrap();
        assert_eq!(info.hex, HexColor::parse("#3498DB").unwrap());
        assert_eq!(info.rgb, RgbColor::new(52, 152, 219));
        assert_eq!(info.hsl, HslColor::new(204, 70, 53));
        assert_eq!(info.color_type, ColorType::Dark);
        assert!((info.luminance - calculate_luminance(52, 152, 219)).abs() < 1e-15);
    }

    #[test]
    fn test_get_color_info_invalid() {
        assert!(matches!(
            get_color_info("#xyz"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }
}
