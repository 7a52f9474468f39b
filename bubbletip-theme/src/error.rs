// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Theme Error Types

use thiserror::Error;

/// Errors that can occur while reading a tooltip style.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}': {details}")]
    InvalidColor {
        /// The offending input.
        value: String,
        /// What was wrong with it.
        details: String,
    },

    /// Error parsing a style table.
    #[error("Failed to parse tooltip style: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details: details.into(),
        }
    }
}
