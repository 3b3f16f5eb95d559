//! Conversions from external infrastructure errors into domain errors.

use inferno_domain::InfernoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub InfernoError);

impl From<InfraError> for InfernoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<InfernoError> for InfraError {
    fn from(value: InfernoError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoInfernoError {
    fn into_inferno(self) -> InfernoError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → InfernoError */
/* -------------------------------------------------------------------------- */

impl IntoInfernoError for std::io::Error {
    fn into_inferno(self) -> InfernoError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => InfernoError::Config(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                InfernoError::Config(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => InfernoError::InvalidInput(self.to_string()),
            _ => InfernoError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_inferno())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → InfernoError */
/* -------------------------------------------------------------------------- */

impl IntoInfernoError for serde_json::Error {
    fn into_inferno(self) -> InfernoError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => InfernoError::Internal(format!("JSON I/O failure: {self}")),
            Category::Syntax | Category::Eof => {
                InfernoError::Config(format!("Invalid JSON format: {self}"))
            }
            Category::Data => InfernoError::Config(format!("Invalid JSON value: {self}")),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_inferno())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → InfernoError */
/* -------------------------------------------------------------------------- */

impl IntoInfernoError for toml::de::Error {
    fn into_inferno(self) -> InfernoError {
        let message = self.message().trim().to_string();
        match self.span() {
            Some(span) => InfernoError::Config(format!(
                "Invalid TOML format at bytes {}..{}: {message}",
                span.start, span.end
            )),
            None => InfernoError::Config(format!("Invalid TOML format: {message}")),
        }
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_inferno())
    }
}
