//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Inferno
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum InfernoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile source error: {0}")]
    ProfileSource(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Inferno operations
pub type Result<T> = std::result::Result<T, InfernoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = InfernoError::ProfileSource("generator exhausted".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"ProfileSource","message":"generator exhausted"}"#);
    }

    #[test]
    fn display_prefixes_category() {
        let err = InfernoError::Config("batch_size must be positive".into());
        assert_eq!(err.to_string(), "Configuration error: batch_size must be positive");
    }
}
