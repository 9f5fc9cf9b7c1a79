//! Core error types for goalhabit-core.
//!
//! Three failure families reach the caller: transport failures, server
//! rejections (non-2xx with a status code) and local validation failures.
//! None of them is retried here; callers decide what to show.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for goalhabit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Network or protocol failure before a status code was received
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error: HTTP {status}")]
    Server { status: u16, body: String },

    /// Local input validation failed; no request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session token storage failed
    #[error("Token storage error: {0}")]
    TokenStore(String),

    /// Requested record is absent from the server's list
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// HTTP status of a server-signaled failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Server { status, .. } => Some(*status),
            CoreError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dotted key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home directory could not be determined
    #[error("Cannot determine home directory")]
    NoHomeDir,
}

/// Validation errors raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty after trimming
    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    /// Numeric input must be strictly positive
    #[error("'{field}' must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    /// A QUANT goal needs a positive target
    #[error("Quantitative goal requires a positive target value")]
    MissingTarget,

    /// Cadence components must both be positive
    #[error("Invalid cadence: {times_per_period} per {period_days} days")]
    InvalidCadence {
        period_days: u32,
        times_per_period: u32,
    },

    #[error("Priority must be between 1 and 5 (got {0})")]
    PriorityOutOfRange(i32),

    /// The action is not offered for the current state
    #[error("Action '{action}' is not available: {reason}")]
    ActionUnavailable { action: String, reason: String },

    /// Invalid textual value for a typed field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<keyring::Error> for CoreError {
    fn from(err: keyring::Error) -> Self {
        CoreError::TokenStore(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(ConfigError::InvalidValue {
            key: "<file>".into(),
            message: err.to_string(),
        })
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Config(ConfigError::InvalidValue {
            key: "<file>".into(),
            message: err.to_string(),
        })
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_exposes_status() {
        let err = CoreError::Server {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Server error: HTTP 404");
    }

    #[test]
    fn validation_error_is_flagged() {
        let err: CoreError = ValidationError::MissingTarget.into();
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }
}
