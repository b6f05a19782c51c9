//! Error taxonomy for upstream API calls.
//!
//! Every adapter maps transport failures, non-success replies and
//! malformed bodies onto [`ApiError`]. Containers only ever see the
//! string from [`ApiError::user_message`].

use thiserror::Error;

/// Errors that can occur while talking to an upstream API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not complete (DNS, connect, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream replied with a non-success status or an error envelope
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Single-record lookup matched nothing
    #[error("{what} not found")]
    NotFound { what: String },

    /// Body was not in the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Required API key is missing
    #[error("{service} API key is not configured (set {hint})")]
    NotConfigured {
        service: &'static str,
        hint: &'static str,
    },

    /// Endpoint URL could not be built from configuration
    #[error("Invalid endpoint URL: {0}")]
    Url(String),
}

impl ApiError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network_failure",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Decode(_) => "decode_error",
            ApiError::NotConfigured { .. } => "not_configured",
            ApiError::Url(_) => "invalid_url",
        }
    }

    /// Message shown in the page's error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(err) if err.is_timeout() => {
                "Request timed out. Check your connection and try again.".to_string()
            }
            ApiError::Network(err) if err.is_connect() => {
                "Could not connect to the server. Check your connection and try again."
                    .to_string()
            }
            ApiError::Upstream { status: 401, .. } => {
                "The server rejected the API key (401 Unauthorized).".to_string()
            }
            ApiError::Upstream { status: 429, .. } => {
                "Rate limit reached. Wait a moment and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
