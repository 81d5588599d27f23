//! Error types for wire-format operations

use thiserror::Error;

/// Result type alias for wire-format operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wire-format operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A MAC address string did not match the canonical `XX:XX:XX:XX:XX:XX` form
    #[error("Malformed MAC address '{text}': {reason}")]
    MalformedAddress { text: String, reason: String },

    /// A read or write needed more bytes than the buffer has left
    #[error("Buffer exhausted: needed {needed} bytes, {remaining} remaining")]
    BufferExhausted { needed: usize, remaining: usize },
}

impl Error {
    /// Create a malformed-address error with a custom reason
    pub fn malformed_address<S: Into<String>>(text: S, reason: S) -> Self {
        Error::MalformedAddress {
            text: text.into(),
            reason: reason.into(),
        }
    }
}
