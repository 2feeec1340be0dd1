//! Color value types
//!
//! All types here are immutable values. [`HexColor`] is always valid once
//! constructed; parsing is the only fallible entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{conversion, metrics};
use super::error::ColorError;

/// A validated hex color, canonically rendered as `#RRGGBB` (uppercase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor(RgbColor);

impl HexColor {
    /// Pure black, `#000000`
    pub const BLACK: HexColor = HexColor(RgbColor::new(0, 0, 0));

    /// Pure white, `#FFFFFF`
    pub const WHITE: HexColor = HexColor(RgbColor::new(255, 255, 255));

    /// Parse a 3- or 6-digit hex string, with or without a leading `#`
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for any other input.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        conversion::hex_to_rgb(input).map(HexColor)
    }

    /// Build from a 24-bit `0xRRGGBB` value; bits above 24 are ignored
    pub const fn from_u32(value: u32) -> Self {
        HexColor(RgbColor::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    pub fn rgb(self) -> RgbColor {
        self.0
    }

    pub fn hsl(self) -> HslColor {
        self.0.to_hsl()
    }

    /// Six uppercase digits without the leading `#`
    pub fn without_hash(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }

    /// Full derived information for this color
    pub fn info(self) -> ColorInfo {
        ColorInfo::from_rgb(self.0)
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        HexColor(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.without_hash())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> HexColor {
        HexColor(self)
    }

    pub fn to_hsl(self) -> HslColor {
        conversion::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`
    pub fn luminance(self) -> f64 {
        metrics::calculate_luminance(self.r, self.g, self.b)
    }

    pub fn color_type(self) -> ColorType {
        metrics::get_color_type(self.r, self.g, self.b)
    }

    /// Channel-wise inversion
    pub fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL color with integer components
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl HslColor {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> RgbColor {
        conversion::hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Same saturation and lightness with the hue rotated by `degrees`
    pub fn rotate_hue(self, degrees: i32) -> Self {
        let hue = (i32::from(self.h) + degrees).rem_euclid(360);
        // rem_euclid(360) is always in 0..360
        Self::new(hue as u16, self.s, self.l)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Light/dark classification based on luminance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorType {
    Light,
    Dark,
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorType::Light => write!(f, "Light"),
            ColorType::Dark => write!(f, "Dark"),
        }
    }
}

/// Everything derived from a single color
///
/// Only produced by [`HexColor::info`] or [`super::get_color_info`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ColorInfo {
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub hsl: HslColor,
    #[serde(rename = "type")]
    pub color_type: ColorType,
    pub luminance: f64,
}

impl ColorInfo {
    pub(crate) fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            color_type: rgb.color_type(),
            luminance: rgb.luminance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_display_is_canonical() {
        let hex = HexColor::parse("3498db").unwrap();
        assert_eq!(hex.to_string(), "#3498DB");
        assert_eq!(hex.without_hash(), "3498DB");
    }

    #[test]
    fn test_hex_from_u32() {
        let hex = HexColor::from_u32(0x1A2B3C);
        assert_eq!(hex.rgb(), RgbColor::new(0x1A, 0x2B, 0x3C));
        assert_eq!(HexColor::from_u32(0xFF00_0000), HexColor::BLACK);
    }

    #[test]
    fn test_hex_from_str() {
        let hex: HexColor = "#fff".parse().unwrap();
        assert_eq!(hex, HexColor::WHITE);
        assert!("#ggg".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_hex_serializes_as_string() {
        let hex = HexColor::parse("#ff6b6b").unwrap();
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"#FF6B6B\"");

        let back: HexColor = serde_json::from_str("\"#1a3\"").unwrap();
        assert_eq!(back.to_string(), "#11AA33");

        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
        assert!(serde_json::from_str::<HexColor>("\" #FFF \"").is_err());
    }

    #[test]
    fn test_rgb_and_hsl_display() {
        assert_eq!(RgbColor::new(52, 152, 219).to_string(), "rgb(52, 152, 219)");
        assert_eq!(HslColor::new(204, 70, 53).to_string(), "hsl(204, 70%, 53%)");
    }

    #[test]
    fn test_rotate_hue_wraps_both_ways() {
        let hsl = HslColor::new(350, 50, 50);
        assert_eq!(hsl.rotate_hue(30).h, 20);
        assert_eq!(HslColor::new(10, 50, 50).rotate_hue(-30).h, 340);
        assert_eq!(hsl.rotate_hue(-720).h, 350);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(RgbColor::new(0, 128, 255).inverted(), RgbColor::new(255, 127, 0));
    }

    #[test]
    fn test_color_info_serializes_type_field() {
        let info = HexColor::WHITE.info();
        let value = serde_json::to_value(info).unwrap();
        assert_eq!(value["hex"], "#FFFFFF");
        assert_eq!(value["type"], "Light");
        assert_eq!(value["rgb"]["g"], 255);
        assert_eq!(value["hsl"]["l"], 100);
    }
}
