//! Error types for the Gemini client

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur during one outline generation call
///
/// Generation failures are always distinct variants here; a successful
/// result never encodes a failure.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("request to Gemini failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("Gemini API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the API
        message: String,
    },

    /// Response carried no candidate text at all
    #[error("Gemini returned no candidate text")]
    EmptyResponse,

    /// Candidate text could not be parsed into an outline
    #[error("failed to parse outline: {0}")]
    ParseError(String),
}

impl GeminiError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}
