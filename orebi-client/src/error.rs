//! Client error types

use thiserror::Error;

/// Client error type
///
/// Transport failures keep the underlying cause so callers can surface
/// it while falling back to the last good snapshot.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/transport failure
    #[error("service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Authentication required (missing/invalid/expired token)
    #[error("authentication required")]
    Unauthorized,

    /// Referenced resource absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request body, caught server-side
    #[error("validation error: {0}")]
    Validation(String),

    /// HTTP 2xx but the envelope reported `success: false`
    #[error("request failed: {0}")]
    Api(String),

    /// Envelope present but expected payload missing or malformed
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other server failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
