// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Configuration Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a [TooltipConfig](crate::config::TooltipConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file was not found.
    #[error("Tooltip config file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file.
    #[error("Failed to parse tooltip config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A length or duration is out of range.
    #[error("Invalid value for `{field}`: {value}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: &'static str, value: f64) -> Self {
        Self::InvalidValue { field, value }
    }
}
