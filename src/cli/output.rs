//! Terminal output helpers
//!
//! Colors are shown as 24-bit ANSI background swatches next to their values.
//! Text printed on top of a swatch uses black or white depending on whether
//! the color is light or dark.

use crate::color::format::{format_contrast, format_luminance};
use crate::color::{calculate_contrast_ratio, ColorInfo, ColorType, DisplayFormat, HexColor};
use std::io::Write;

const RESET: &str = "\x1b[0m";

/// Width of a swatch in terminal cells
const SWATCH_WIDTH: usize = 8;

// ============================================================================
// Swatches
// ============================================================================

/// A block of `width` cells filled with `color`
pub fn swatch(color: HexColor, width: usize) -> String {
    let rgb = color.rgb();
    format!(
        "\x1b[48;2;{};{};{}m{}{}",
        rgb.r,
        rgb.g,
        rgb.b,
        " ".repeat(width),
        RESET
    )
}

/// `text` drawn on a `color` background in a readable foreground
pub fn label(color: HexColor, text: &str) -> String {
    let rgb = color.rgb();
    let fg = match rgb.color_type() {
        ColorType::Light => "30",
        ColorType::Dark => "97",
    };
    format!(
        "\x1b[{};48;2;{};{};{}m {} {}",
        fg, rgb.r, rgb.g, rgb.b, text, RESET
    )
}

// ============================================================================
// Console output helpers
// ============================================================================

/// Print a header section with a box
pub fn print_header(title: &str) {
    let width = 48;
    let title_padded = format!("{:^width$}", title, width = width - 2);
    println!();
    println!("╔{}╗", "═".repeat(width - 2));
    println!("║{}║", title_padded);
    println!("╚{}╝", "═".repeat(width - 2));
}

/// Print a success message with checkmark
pub fn print_success(msg: &str) {
    println!("  ✓ {}", msg);
}

/// Print an info message with bullet
pub fn print_info(msg: &str) {
    println!("  • {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("  ⚠ {}", msg);
}

// ============================================================================
// Color details
// ============================================================================

/// Lines describing a color, the preferred format first
pub fn color_info_lines(info: &ColorInfo, preferred: DisplayFormat, favorite: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    let star = if favorite { " ★" } else { "" };
    lines.push(format!("{}{}", preferred.render(info), star));

    for format in DisplayFormat::ALL.into_iter().filter(|f| *f != preferred) {
        lines.push(format!("{:<5}{}", format!("{}:", format), format.render(info)));
    }

    lines.push(format!("type: {}", info.color_type));
    lines.push(format!("luminance: {}", format_luminance(info.luminance)));

    let on_black = calculate_contrast_ratio(info.rgb, HexColor::BLACK.rgb());
    let on_white = calculate_contrast_ratio(info.rgb, HexColor::WHITE.rgb());
    lines.push(format!(
        "contrast: {}:1 vs black, {}:1 vs white",
        format_contrast(on_black),
        format_contrast(on_white)
    ));

    lines
}

/// Print a color with a swatch next to each line of its details
pub fn print_color_info(info: &ColorInfo, preferred: DisplayFormat, favorite: bool) {
    let block = swatch(info.hex, SWATCH_WIDTH);
    println!();
    for line in color_info_lines(info, preferred, favorite) {
        println!("  {}  {}", block, line);
    }
}

/// One numbered palette entry: index, swatch and the color in `format`
pub fn palette_line(index: usize, color: HexColor, format: DisplayFormat) -> String {
    format!(
        "{:>3}. {} {}",
        index,
        swatch(color, 4),
        format.render(&color.info())
    )
}

/// Print a titled, numbered list of colors
pub fn print_palette(title: &str, colors: &[HexColor], format: DisplayFormat) {
    println!();
    println!("{}:", title);
    if colors.is_empty() {
        println!("  (none)");
        return;
    }
    for (i, color) in colors.iter().enumerate() {
        println!("  {}", palette_line(i + 1, *color, format));
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Tees log output to stderr and a log file
pub struct DualWriter {
    pub console: std::io::Stderr,
    pub file: std::fs::File,
}

impl Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let _ = self.console.write(buf);
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let _ = self.console.flush();
        self.file.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::get_color_info;

    #[test]
    fn test_swatch_uses_truecolor_background() {
        let color = HexColor::parse("#3498DB").unwrap();
        assert_eq!(swatch(color, 2), "\x1b[48;2;52;152;219m  \x1b[0m");
    }

    #[test]
    fn test_label_foreground_follows_color_type() {
        assert!(label(HexColor::WHITE, "x").starts_with("\x1b[30;"));
        assert!(label(HexColor::BLACK, "x").starts_with("\x1b[97;"));
    }

    #[test]
    fn test_color_info_lines_preferred_first() {
        let info = get_color_info("#3498DB").unwrap();
        let lines = color_info_lines(&info, DisplayFormat::Hsl, false);

        assert_eq!(lines[0], "hsl(204, 70%, 53%)");
        assert_eq!(lines[1], "hex: #3498DB");
        assert_eq!(lines[2], "rgb: rgb(52, 152, 219)");
        assert_eq!(lines[3], "type: Dark");
        assert_eq!(lines[4], "luminance: 28%");
        assert_eq!(lines[5], "contrast: 6.7:1 vs black, 3.2:1 vs white");
    }

    #[test]
    fn test_color_info_lines_marks_favorite() {
        let info = get_color_info("#FFFFFF").unwrap();
        let lines = color_info_lines(&info, DisplayFormat::Hex, true);
        assert_eq!(lines[0], "#FFFFFF ★");
        assert!(lines.contains(&"type: Light".to_string()));
        assert!(lines.contains(&"contrast: 21.0:1 vs black, 1.0:1 vs white".to_string()));
    }

    #[test]
    fn test_palette_line() {
        let color = HexColor::parse("#FF0000").unwrap();
        let line = palette_line(3, color, DisplayFormat::Rgb);
        assert!(line.starts_with("  3. "));
        assert!(line.ends_with(" rgb(255, 0, 0)"));
    }
}
