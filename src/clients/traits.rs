//! Collaborator contracts consumed by the registration pipeline.
//!
//! The pipeline holds these as trait objects, so any implementation works: the
//! store-backed clients in this crate, a host's own adapters, or test doubles.

use crate::client_store::ClientError;
use crate::credit_bureau::CreditError;
use crate::model::{Client, ClientId, User, UserId};
use crate::user_store::UserError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Resolves client identifiers to client records.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Returns the client registered under `id`.
    ///
    /// A missing client is an error ([`ClientError::NotFound`]), never a default record.
    async fn get_by_id(&self, id: ClientId) -> Result<Client, ClientError>;
}

/// External oracle returning a base credit limit for a person.
#[async_trait]
pub trait CreditService: Send + Sync {
    async fn get_credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, CreditError>;
}

/// Accepts fully-formed users for storage.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    /// Stores the user and returns the id it was stored under.
    async fn add(&self, user: User) -> Result<UserId, UserError>;
}
