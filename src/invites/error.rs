use thiserror::Error;

use crate::service::ServiceError;

/// Failure of an invite command.
///
/// There is one kind only; `message` is the display text already stored
/// in the slice's `error_message`.
#[derive(Debug, Error)]
pub enum InviteError {
    #[error("{message}")]
    RequestFailed {
        message: String,
        #[source]
        source: ServiceError,
    },
}

impl InviteError {
    pub fn message(&self) -> &str {
        match self {
            InviteError::RequestFailed { message, .. } => message,
        }
    }

    pub fn service_error(&self) -> &ServiceError {
        match self {
            InviteError::RequestFailed { source, .. } => source,
        }
    }
}
