//! The color engine's single failure mode

use thiserror::Error;

/// Error raised by the color conversion engine
///
/// Only functions that take a raw hex string can fail. Everything else works
/// on pre-validated numeric ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
