//! Transport error types.

use thiserror::Error;

/// Errors that can occur when talking to the claim-intelligence API.
///
/// Network unreachability, non-2xx statuses, and malformed response bodies
/// all land here; the caller decides presentation. Nothing in this crate
/// panics on a failed request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code. `message` is the server's
    /// `detail` field when the error body was JSON, or a generic fallback.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Extracted detail message or fallback text.
        message: String,
    },

    /// Failed to parse an API response body.
    #[error("parse error: {0}")]
    Parse(String),
}
