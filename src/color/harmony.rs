//! Color harmonies derived from a base color
//!
//! Analogous and triadic sets rotate the hue in HSL space and keep the base
//! saturation and lightness. The complementary color is a plain RGB inversion.

use super::conversion::hex_to_rgb;
use super::model::HexColor;
use super::error::ColorError;

/// Hue distance between neighbouring analogous colors
pub const ANALOGOUS_STEP_DEGREES: i32 = 30;

/// Number of analogous colors when the caller has no preference
pub const DEFAULT_ANALOGOUS_COUNT: usize = 3;

/// Hue distance between triadic colors
pub const TRIADIC_STEP_DEGREES: i32 = 120;

/// Invert every channel of `hex`
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is malformed.
pub fn get_complementary_color(hex: &str) -> Result<HexColor, ColorError> {
    Ok(hex_to_rgb(hex)?.inverted().to_hex())
}

/// `count` colors spaced 30° apart, centered on the hue of `hex`
///
/// Position `i` gets an offset of `(i - count / 2) * 30°`, so an odd count is
/// symmetric around the base hue and includes it in the middle.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is malformed.
pub fn get_analogous_colors(hex: &str, count: usize) -> Result<Vec<HexColor>, ColorError> {
    let base = hex_to_rgb(hex)?.to_hsl();
    let half = (count / 2) as i32;

    Ok((0..count as i32)
        .map(|i| {
            base.rotate_hue((i - half) * ANALOGOUS_STEP_DEGREES)
                .to_rgb()
                .to_hex()
        })
        .collect())
}

/// The base hue and the two hues 120° and 240° away
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is malformed.
pub fn get_triadic_colors(hex: &str) -> Result<[HexColor; 3], ColorError> {
    let base = hex_to_rgb(hex)?.to_hsl();
    Ok([0, 1, 2].map(|i| base.rotate_hue(i * TRIADIC_STEP_DEGREES).to_rgb().to_hex()))
}
