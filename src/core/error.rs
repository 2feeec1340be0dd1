//! Error types for the color generator
//!
//! [`GeneratorError`] covers the application layer (state file, export,
//! auto mode) and wraps the engine's [`ColorError`].

use thiserror::Error;

pub use crate::color::error::ColorError;

/// Main error type for the application layer
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A color value could not be parsed
    #[error(transparent)]
    Color(#[from] ColorError),

    /// General I/O error
    #[error("IO error: {0}")]
    IoError(String),

    /// State file could not be read or written
    #[error("State error: {0}")]
    StateError(String),

    /// Palette export failed
    #[error("Export failed: {0}")]
    ExportError(String),

    /// Auto mode could not be started or stopped
    #[error("Auto mode error: {0}")]
    AutoModeError(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GeneratorError>;

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_converts_transparently() {
        let err: GeneratorError = ColorError::invalid_format("12", "bad length").into();
        assert!(matches!(err, GeneratorError::Color(_)));
        assert_eq!(err.to_string(), "Invalid hex color '12': bad length");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GeneratorError = io.into();
        assert!(matches!(err, GeneratorError::IoError(ref msg) if msg.contains("missing")));
    }
}
