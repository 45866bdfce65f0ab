//! Error types and error handling for Tandem.
//!
//! This module defines the error types used throughout the
//! application. The search core itself (parser, scorer, ranker) is
//! total and never produces errors; everything fallible lives at the
//! edges (configuration, snapshot loading, CLI input).

use thiserror::Error;

/// Result type alias for Tandem operations
pub type Result<T> = std::result::Result<T, TandemError>;

/// Main error type for Tandem
#[derive(Error, Debug)]
pub enum TandemError {
    #[error("Data directory not found: {0}")]
    DataDirNotFound(String),

    #[error("Failed to load collection: {0}")]
    LoadFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TandemError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, TandemError::DataDirNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TandemError::InvalidQuery(_) | TandemError::ConfigError(_)
        )
    }
}
