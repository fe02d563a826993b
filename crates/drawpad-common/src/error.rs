//! Error types and utilities for Drawpad

use thiserror::Error;

/// Result type alias for Drawpad operations
pub type Result<T> = std::result::Result<T, DrawpadError>;

/// Main error type for Drawpad operations
#[derive(Error, Debug)]
pub enum DrawpadError {
    /// A record could not be interpreted (e.g. an unparseable `time`)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
        /// The offending record or field, when known
        field: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration or user supplied values
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Name of the field that failed validation
        field: Option<String>,
    },

    /// A like was refused because the drawing is still cooling down
    #[error("Drawing '{name}' is on cooldown (remaining: {remaining_ms}ms)")]
    Cooldown {
        /// Drawing name
        name: String,
        /// Milliseconds until the next like is accepted
        remaining_ms: u64,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DrawpadError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new invalid input error naming the offending field
    pub fn invalid_input_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Returns true for errors caused by malformed drawing records.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
