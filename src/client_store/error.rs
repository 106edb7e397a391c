//! Error types for the client directory.

use crate::model::ClientId;
use thiserror::Error;

/// Errors that can occur while looking up or registering clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// No client is registered under the requested id.
    #[error("Client not found: {0}")]
    NotFound(ClientId),

    /// A client with the same id is already registered.
    #[error("Client already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the directory actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ClientError {
    fn from(msg: String) -> Self {
        ClientError::ActorCommunicationError(msg)
    }
}
