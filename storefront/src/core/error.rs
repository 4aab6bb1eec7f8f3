//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced an HTTP response (connection refused, DNS)
//! - **Decode**: a response arrived but its body was not the expected JSON
//! - **Validation**: a required field is missing, checked before any request is sent,
//!   or the server rejected a payload without assigning an id
//! - **OperationFailed**: the server answered, but not with the expected success status
//! - **Cancelled**: the caller's cancellation token fired before the result was committed
//!
//! None of these are retried automatically and none are fatal: stores leave their
//! previous state untouched and the caller surfaces a [`Notice`](crate::app::notice::Notice).
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use storefront::core::error::{AppError, Result};
//!
//! fn require_name(name: &str) -> Result<&str> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::Validation("Please fill in all fields".to_string()));
//!     }
//!     Ok(name)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type for storefront operations.
///
/// ```rust
/// use storefront::core::error::AppError;
///
/// let err = AppError::OperationFailed("DELETE /categories/3 returned 500".to_string());
/// assert_eq!(err.to_string(), "Operation failed: DELETE /categories/3 returned 500");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Request could not reach the server.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Required input missing, or the server rejected the payload.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server responded without the expected success status.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Work abandoned because the owning view went away.
    #[error("Operation cancelled")]
    Cancelled,
}

impl AppError {
    /// `true` for failures a caller may reasonably retry by repeating the action.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::OperationFailed(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            AppError::Validation("Please fill all fields".to_string()).to_string(),
            "Validation error: Please fill all fields"
        );
        assert_eq!(AppError::Cancelled.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<Vec<i64>>("<html>").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }

    #[test]
    fn test_transient_classification() {
        assert!(AppError::Network(String::new()).is_transient());
        assert!(AppError::OperationFailed(String::new()).is_transient());
        assert!(!AppError::Decode(String::new()).is_transient());
        assert!(!AppError::Cancelled.is_transient());
    }
}
