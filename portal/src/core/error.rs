//! # Common Error Types
//!
//! Consolidated error handling for the portal client.
//!
//! Two layers of errors exist:
//!
//! - [`ApiError`]: everything that can go wrong on one backend call. The
//!   variants follow the session contract: connectivity, timeout,
//!   authentication failure (401), any other HTTP status, and a body that is
//!   not the expected envelope.
//! - [`AppError`]: the application shell (configuration, session storage,
//!   navigation state) plus a wrapped [`ApiError`].
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use portal::core::error::ApiError;
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err {
//!         ApiError::Unauthorized(_) => "Session expired, please sign in again",
//!         ApiError::Timeout => "The server took too long to respond",
//!         _ => "Something went wrong",
//!     }
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `reqwest::Error` → [`ApiError`] (classified by [`ApiError::from`])
//! - `shared::EnvelopeError` → [`ApiError::Envelope`]
//! - [`SessionStoreError`] → [`ApiError::Session`]
//! - [`ApiError`] / [`SessionStoreError`] → [`AppError`]

use shared::EnvelopeError;
use thiserror::Error;

/// Failure of a single backend call.
///
/// Nothing in the API layer swallows these: interceptor side effects run
/// first, then the error is returned to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response reached the client (connection refused, DNS, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The per-request timeout elapsed.
    #[error("Request timed out: the server took too long to respond")]
    Timeout,

    /// HTTP 401. The stored credential has already been cleared when this
    /// is returned.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a `{ status, data, ... }` envelope, or `data` had
    /// the wrong shape.
    #[error("Unexpected response body: {0}")]
    Envelope(String),

    /// The request could not be built, e.g. a malformed base URL.
    #[error("Invalid request: {0}")]
    Request(String),

    /// The call succeeded but its credential could not be stored or removed.
    #[error("Session storage failed: {0}")]
    Session(String),
}

impl ApiError {
    /// HTTP status carried by the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error ended the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if err.is_decode() {
            ApiError::Envelope(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        ApiError::Envelope(err.to_string())
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(err: SessionStoreError) -> Self {
        ApiError::Session(err.to_string())
    }
}

/// Credential store failure.
///
/// The request interceptor never propagates these; it treats an unreadable
/// store as "no credential".
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session store is corrupt: {0}")]
    Corrupt(String),
}

/// Application-wide error type for the portal shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Credential storage error.
    #[error("Session error: {0}")]
    Session(#[from] SessionStoreError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),
}

/// Result of a single backend call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Status { status: 404, message: "Not found".to_string() }.to_string(),
            "HTTP 404: Not found"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized("expired".to_string()).status(), Some(401));
        assert_eq!(
            ApiError::Status { status: 500, message: String::new() }.status(),
            Some(500)
        );
        assert_eq!(ApiError::Timeout.status(), None);
        assert_eq!(ApiError::Network(String::new()).status(), None);
    }

    #[test]
    fn test_envelope_error_conversion() {
        let err: ApiError = EnvelopeError::MissingData.into();
        assert!(matches!(err, ApiError::Envelope(msg) if msg.contains("data")));
    }

    #[test]
    fn test_session_store_error_conversion() {
        let err: ApiError = SessionStoreError::Corrupt("bad json".to_string()).into();
        assert_eq!(err, ApiError::Session("Session store is corrupt: bad json".to_string()));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_app_error_wraps_api_error() {
        let err: AppError = ApiError::Timeout.into();
        assert!(err.to_string().starts_with("API error: Request timed out"));
    }
}
