//! Controller error types

use std::time::Duration;

use inferno_common::time::ShutdownError;
use inferno_domain::InfernoError;
use thiserror::Error;

use crate::errors::InfraError;

/// Controller lifecycle errors
#[derive(Debug, Error)]
pub enum ControllerError {
    /// `start` was called twice
    #[error("Controller already started")]
    AlreadyStarted,

    /// The controller has been torn down
    #[error("Controller torn down")]
    TornDown,

    /// Background tasks did not stop in time
    #[error("{pending} background task(s) still running after {timeout:?}")]
    Timeout { pending: usize, timeout: Duration },

    /// A background task panicked
    #[error("Task join failed: {0}")]
    TaskJoinFailed(String),
}

impl From<ShutdownError> for ControllerError {
    fn from(err: ShutdownError) -> Self {
        match err {
            ShutdownError::Timeout { pending, timeout } => Self::Timeout { pending, timeout },
            ShutdownError::TaskJoinFailed(reason) => Self::TaskJoinFailed(reason),
        }
    }
}

impl From<ControllerError> for InfraError {
    fn from(err: ControllerError) -> Self {
        let inferno_err = match err {
            ControllerError::AlreadyStarted | ControllerError::TornDown => {
                InfernoError::InvalidInput(err.to_string())
            }
            ControllerError::Timeout { .. } | ControllerError::TaskJoinFailed(_) => {
                InfernoError::Internal(err.to_string())
            }
        };
        InfraError(inferno_err)
    }
}

impl From<ControllerError> for InfernoError {
    fn from(err: ControllerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Convenience type alias for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_misuse_is_invalid_input() {
        let err: InfernoError = ControllerError::AlreadyStarted.into();
        assert_eq!(err, InfernoError::InvalidInput("Controller already started".into()));
    }

    #[test]
    fn shutdown_timeout_keeps_details() {
        let err = ControllerError::from(ShutdownError::Timeout {
            pending: 2,
            timeout: Duration::from_millis(500),
        });
        assert!(matches!(err, ControllerError::Timeout { pending: 2, .. }));
        assert!(matches!(InfernoError::from(err), InfernoError::Internal(_)));
    }
}
