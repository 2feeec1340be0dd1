//! Text rendering of colors and metrics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::ColorInfo;

/// Which representation to show first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl DisplayFormat {
    pub const ALL: [DisplayFormat; 3] = [DisplayFormat::Hex, DisplayFormat::Rgb, DisplayFormat::Hsl];

    /// Render `info` in this format, e.g. `#3498DB`, `rgb(52, 152, 219)`
    /// or `hsl(204, 70%, 53%)`
    pub fn render(self, info: &ColorInfo) -> String {
        match self {
            DisplayFormat::Hex => info.hex.to_string(),
            DisplayFormat::Rgb => info.rgb.to_string(),
            DisplayFormat::Hsl => info.hsl.to_string(),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayFormat::Hex => "hex",
            DisplayFormat::Rgb => "rgb",
            DisplayFormat::Hsl => "hsl",
        };
        f.write_str(name)
    }
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Ok(DisplayFormat::Hex),
            "rgb" => Ok(DisplayFormat::Rgb),
            "hsl" => Ok(DisplayFormat::Hsl),
            other => Err(format!("unknown display format '{}'", other)),
        }
    }
}

/// Contrast ratio to one decimal place, e.g. `6.7`
pub fn format_contrast(ratio: f64) -> String {
    format!("{:.1}", ratio)
}

/// Luminance as a whole percentage, e.g. `28%`
pub fn format_luminance(luminance: f64) -> String {
    format!("{}%", (luminance * 100.0).round())
}
