use thiserror::Error;

/// Errors raised while building a [`StrategyRegistry`](crate::credit::StrategyRegistry).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No default credit limit strategy registered")]
    MissingDefault,

    #[error("More than one default credit limit strategy registered")]
    DuplicateDefault,

    #[error("Credit limit strategy registered twice for {0:?}")]
    DuplicateRequirement(String),
}
