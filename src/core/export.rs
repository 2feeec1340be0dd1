//! Palette export to JSON or CSS
//!
//! JSON output is a pretty-printed array of hex strings. CSS output is a list
//! of numbered custom properties under a dated header comment:
//!
//! ```text
//! /* Color Palette - Generated 2024-05-01 */
//!
//! --color-1: #FF6B6B;
//! --color-2: #4ECDC4;
//! ```

use crate::color::HexColor;
use crate::core::error::{GeneratorError, Result};
use chrono::{NaiveDate, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported palette export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Css,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            other => Err(GeneratorError::ExportError(format!(
                "unknown export format '{}' (expected json or css)",
                other
            ))),
        }
    }
}

/// Render `colors` in the given format, dated `date`
pub fn render_palette(colors: &[HexColor], format: ExportFormat, date: NaiveDate) -> Result<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(colors)
            .map_err(|e| GeneratorError::ExportError(format!("Failed to serialize palette: {}", e))),
        ExportFormat::Css => {
            let mut css = format!("/* Color Palette - Generated {} */\n\n", date.format("%Y-%m-%d"));
            for (index, color) in colors.iter().enumerate() {
                // Writing to a String cannot fail
                let _ = writeln!(css, "--color-{}: {};", index + 1, color);
            }
            Ok(css)
        }
    }
}

/// File name for a palette exported on `date`, e.g. `color-palette-2024-05-01.css`
pub fn palette_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!("color-palette-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Write `colors` into `directory` using today's UTC date
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Fails with [`GeneratorError::ExportError`] when `colors` is empty, and
/// with an I/O error when the file cannot be written.
pub fn export_palette(colors: &[HexColor], format: ExportFormat, directory: &Path) -> Result<PathBuf> {
    export_palette_on(colors, format, directory, Utc::now().date_naive())
}

/// Same as [`export_palette`] with an explicit date
pub fn export_palette_on(
    colors: &[HexColor],
    format: ExportFormat,
    directory: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    if colors.is_empty() {
        return Err(GeneratorError::ExportError(
            "palette is empty, nothing to export".to_string(),
        ));
    }

    let content = render_palette(colors, format, date)?;

    fs::create_dir_all(directory)?;
    let path = directory.join(palette_file_name(format, date));
    fs::write(&path, content)?;

    info!(
        "Exported {} colors as {} to {}",
        colors.len(),
        format,
        path.display()
    );
    Ok(path)
}
