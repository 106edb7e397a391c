//! Error types for the credit service.

use thiserror::Error;

/// Errors that can occur while obtaining a credit limit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreditError {
    /// The bureau holds no profile for the identity.
    #[error("No credit record for {0}")]
    NoCreditRecord(String),

    /// The bureau answered with a limit that cannot be granted.
    #[error("Negative credit limit {limit} for {identity}")]
    NegativeLimit { identity: String, limit: i64 },

    /// A profile for the identity is already on file.
    #[error("Credit profile already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the bureau actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CreditError {
    fn from(msg: String) -> Self {
        CreditError::ActorCommunicationError(msg)
    }
}
