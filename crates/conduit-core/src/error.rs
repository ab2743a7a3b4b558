//! Error types for conduit-core

use thiserror::Error;

/// Host contract error type
#[derive(Debug, Error)]
pub enum Error {
    /// The host rejected or failed to record an acknowledgment
    #[error("acknowledgment failed: {0}")]
    Ack(String),

    /// Payload could not be decoded into an outbound message
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
