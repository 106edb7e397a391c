//! Error types for the registration pipeline.

use crate::client_store::ClientError;
use crate::credit_bureau::CreditError;
use crate::user_store::UserError;
use thiserror::Error;

/// A collaborator failed while a registration was in progress.
///
/// Rejections are not errors; they come back as `Ok(false)` or
/// [`RegistrationOutcome::Rejected`](crate::registration::RegistrationOutcome::Rejected).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Client lookup failed: {0}")]
    Client(#[from] ClientError),

    #[error("Credit service failed: {0}")]
    Credit(#[from] CreditError),

    #[error("Persisting user failed: {0}")]
    Persistence(#[from] UserError),
}
