use thiserror::Error;

/// Errors returned by invite service implementations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to reach the service or read its response
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Service answered with a non-success status
    #[error("Service error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Base URL cannot be used to build request URLs
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            ServiceError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::Status {
            status: 404,
            message: message.into(),
        }
    }
}
