//! Core error types for lifeweeks-core.
//!
//! Invalid configuration (most importantly an unparseable birth date)
//! fails fast at startup rather than producing a corrupt week sequence.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifeweeks-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Birth date string did not parse as a calendar date.
    #[error("Invalid birth date '{value}': {message}")]
    InvalidBirthDate { value: String, message: String },

    /// Grid horizon ends before it begins.
    #[error("Invalid horizon: end year {end_year} precedes birth year {birth_year}")]
    HorizonBeforeBirth { birth_year: i32, end_year: i32 },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
