// --- File: crates/lokal_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Lokal client errors.
///
/// Each crate keeps its own error enum and implements
/// `From<CrateError> for LokalError`, so callers that only care about
/// "did it work" can use `?` across crate boundaries.
#[derive(Error, Debug)]
pub enum LokalError {
    /// The backend answered, but not with what was asked for. Carries the
    /// message a user should see.
    #[error("{0}")]
    ApiError(String),

    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred while reading or writing local state
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl LokalError {
    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            LokalError::ApiError(_) => 1,
            LokalError::HttpError(_) => 3,
            LokalError::ParseError(_) => 4,
            LokalError::ConfigError(_) => 78,
            LokalError::ValidationError(_) => 65,
            LokalError::StorageError(_) => 74,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for LokalError {
    fn from(err: reqwest::Error) -> Self {
        LokalError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LokalError {
    fn from(err: serde_json::Error) -> Self {
        LokalError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for LokalError {
    fn from(err: std::io::Error) -> Self {
        LokalError::StorageError(err.to_string())
    }
}

impl From<config::ConfigError> for LokalError {
    fn from(err: config::ConfigError) -> Self {
        LokalError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> LokalError {
    LokalError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> LokalError {
    LokalError::ValidationError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_bare_message() {
        let err = LokalError::ApiError("Insufficient balance".to_string());
        assert_eq!(err.to_string(), "Insufficient balance");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_json_error_converts_to_parse_error() {
        let err: LokalError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, LokalError::ParseError(_)));
    }

    #[test]
    fn test_helpers_pick_variant() {
        assert!(matches!(config_error("x"), LokalError::ConfigError(_)));
        assert!(matches!(validation_error("x"), LokalError::ValidationError(_)));
    }
}
