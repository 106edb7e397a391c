//! # Registration Configuration
//!
//! Thresholds used by the validator and sizing for the store actors. The defaults
//! reproduce the fixed registration rules: applicants must be 21, and a granted credit
//! limit below 500 rejects the registration.
//!
//! ```rust
//! use user_onboarding::config::RegistrationConfig;
//!
//! let config = RegistrationConfig::default().with_store_buffer_size(64);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.minimum_age, 21);
//! ```

use crate::registration::{MINIMUM_AGE, MINIMUM_CREDIT_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`RegistrationConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("store_buffer_size must be greater than zero")]
    ZeroBufferSize,

    #[error("minimum_age must not be negative, got {0}")]
    NegativeMinimumAge(i32),

    #[error("minimum_credit_limit must not be negative, got {0}")]
    NegativeMinimumCreditLimit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Age in whole years an applicant must have reached.
    pub minimum_age: i32,
    /// A granted credit limit strictly below this rejects the registration.
    pub minimum_credit_limit: i64,
    /// Channel capacity of each store actor.
    pub store_buffer_size: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            minimum_age: MINIMUM_AGE,
            minimum_credit_limit: MINIMUM_CREDIT_LIMIT,
            store_buffer_size: 32,
        }
    }
}

impl RegistrationConfig {
    pub fn with_minimum_age(mut self, minimum_age: i32) -> Self {
        self.minimum_age = minimum_age;
        self
    }

    pub fn with_minimum_credit_limit(mut self, minimum_credit_limit: i64) -> Self {
        self.minimum_credit_limit = minimum_credit_limit;
        self
    }

    pub fn with_store_buffer_size(mut self, store_buffer_size: usize) -> Self {
        self.store_buffer_size = store_buffer_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if self.minimum_age < 0 {
            return Err(ConfigError::NegativeMinimumAge(self.minimum_age));
        }
        if self.minimum_credit_limit < 0 {
            return Err(ConfigError::NegativeMinimumCreditLimit(
                self.minimum_credit_limit,
            ));
        }
        Ok(())
    }
}
