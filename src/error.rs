//! Error types for Verdict
//!
//! Rule failures are never errors; they are collected in a `ValidationResult`.
//! The variants here cover misuse of the API and I/O around it.

use crate::validation::ValidationResult;
use thiserror::Error;

/// All error types that can occur in Verdict
#[derive(Debug, Error)]
pub enum VerdictError {
    /// A mandatory field of a record candidate was absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A configured format pattern failed to compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration values contradict each other
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// An operation required a valid candidate and got an invalid one
    #[error("Rejected: {0}")]
    Rejected(ValidationResult),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;
