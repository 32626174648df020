//! Error types for financial-records API operations.
//!
//! Errors are classified for retry logic: the workload generator's read path
//! treats transient failures as retryable attempts, while the write path
//! logs and moves on.

use thiserror::Error;

/// Errors during financial-records API operations.
///
/// These errors represent failures when communicating with the API,
/// including HTTP errors, timeouts, and parsing failures. Unexpected
/// statuses on write endpoints are *not* errors — they are captured in
/// [`crate::client::ApiResponse`] for the caller to evaluate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP error response from the API (read endpoints only).
    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    /// Request to the API timed out.
    #[error("Request timeout")]
    Timeout,

    /// Failed to parse a JSON response body.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP client error (network, TLS, etc.).
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Client construction or request-building failure.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// Check if this error represents a transient condition that may succeed
    /// if retried.
    ///
    /// Transient conditions include:
    /// - Server errors (5xx)
    /// - Rate limiting (429)
    /// - Request timeouts
    /// - Network/transport errors
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError { status, .. } => *status >= 500 || *status == 429,
            Self::Timeout => true,
            Self::JsonError(_) => false,
            Self::HttpClientError(_) => true, // Network issues are transient
            Self::Configuration { .. } => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
