//! Crate-wide error type and result alias.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LukmanError>;

/// Errors produced by the lukman client.
#[derive(Debug, Error)]
pub enum LukmanError {
    /// Input rejected before any network call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The API answered with a non-2xx status. `message` carries the
    /// server-supplied `detail` when the body had one.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network failure or timeout before a response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),
}
