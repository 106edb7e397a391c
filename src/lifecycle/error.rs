use crate::config::ConfigError;
use crate::credit::RegistryError;
use thiserror::Error;

/// Errors raised while starting or stopping a [`RegistrationSystem`](crate::lifecycle::RegistrationSystem).
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Strategy registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}
