//! Authentication error types.

use thiserror::Error;

/// Errors that can occur when calling the authentication endpoint.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] brightcart_core::EmailError),

    /// The endpoint URL could not be built from the configuration.
    #[error("invalid authenticate URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The credential payload could not be serialized.
    #[error("failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("authentication rejected: {status} - {message}")]
    Rejected { status: u16, message: String },
}
