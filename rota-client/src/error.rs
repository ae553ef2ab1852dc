//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No bearer token configured; checked before any request is sent
    #[error("No authentication token available")]
    MissingToken,

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

// The coalescing save path shares one outcome between callers, so it
// works in terms of the cloneable AppError.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => AppError::network(e.to_string()),
            ClientError::InvalidResponse(msg) => AppError::persistence(msg),
            ClientError::MissingToken | ClientError::Unauthorized => AppError::not_authenticated(),
            ClientError::Forbidden(msg) => {
                AppError::with_message(ErrorCode::PermissionDenied, msg)
            }
            ClientError::NotFound(msg) => {
                AppError::with_message(ErrorCode::ScheduleNotFound, msg)
            }
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::Internal(msg) => AppError::persistence(msg),
            ClientError::Serialization(e) => AppError::internal(e.to_string()),
        }
    }
}
