use thiserror::Error;
use waitlist_types::{ErrorCode, ValidationError};

/// Errors returned by a [`crate::SubmissionTransport`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected a field
    #[error("Invalid submission: {0}")]
    Validation(ValidationError),

    /// The email has already joined the waitlist
    #[error("Email already on the waitlist: {email}")]
    DuplicateEmail { email: String },

    /// The server could not reach its database
    #[error("Waitlist storage unavailable")]
    StorageUnavailable,

    /// Any other error response
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
