//! Error types for the user store.

use thiserror::Error;

/// Errors that can occur while persisting or reading users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// A user with the same id already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The record was refused by the store.
    #[error("User storage error: {0}")]
    StorageError(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
