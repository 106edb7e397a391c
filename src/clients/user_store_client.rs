//! # User Store Client
//!
//! Wraps a `StoreClient<User>` and exposes it as a [`PersistenceSink`].
use crate::clients::{PersistenceSink, RecordClient};
use crate::framework::{StoreClient, StoreError};
use crate::model::{User, UserId};
use crate::user_store::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the user store actor.
#[derive(Clone)]
pub struct UserStoreClient {
    inner: StoreClient<User>,
}

impl UserStoreClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

fn map_store_error(e: StoreError) -> UserError {
    match e {
        StoreError::Duplicate(key) => UserError::AlreadyExists(key),
        StoreError::Record(source) => UserError::StorageError(source.to_string()),
        other => UserError::ActorCommunicationError(other.to_string()),
    }
}

#[async_trait]
impl RecordClient<User> for UserStoreClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        map_store_error(e)
    }
}

#[async_trait]
impl PersistenceSink for UserStoreClient {
    #[instrument(skip(self, user), fields(client_id = %user.client.id))]
    async fn add(&self, user: User) -> Result<UserId, UserError> {
        debug!(
            has_credit_limit = user.has_credit_limit,
            credit_limit = user.credit_limit,
            "Sending request"
        );
        self.inner.insert(user).await.map_err(map_store_error)
    }
}
