//! # Client Directory Client
//!
//! Wraps a `StoreClient<Client>` and exposes it as a [`ClientDirectory`].
use crate::client_store::ClientError;
use crate::clients::{ClientDirectory, RecordClient};
use crate::framework::{StoreClient, StoreError};
use crate::model::{Client, ClientId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the client directory actor.
#[derive(Clone)]
pub struct ClientDirectoryClient {
    inner: StoreClient<Client>,
}

impl ClientDirectoryClient {
    pub fn new(inner: StoreClient<Client>) -> Self {
        Self { inner }
    }

    /// Registers a client under its own id.
    #[instrument(skip(self, client), fields(client_id = %client.id))]
    pub async fn register_client(&self, client: Client) -> Result<ClientId, ClientError> {
        debug!(classification = %client.name, "Sending request");
        self.inner.insert(client).await.map_err(map_store_error)
    }
}

fn map_store_error(e: StoreError) -> ClientError {
    match e {
        StoreError::Duplicate(key) => ClientError::AlreadyExists(key),
        other => ClientError::ActorCommunicationError(other.to_string()),
    }
}

#[async_trait]
impl RecordClient<Client> for ClientDirectoryClient {
    type Error = ClientError;

    fn inner(&self) -> &StoreClient<Client> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        map_store_error(e)
    }
}

#[async_trait]
impl ClientDirectory for ClientDirectoryClient {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ClientId) -> Result<Client, ClientError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(map_store_error)?
            .ok_or(ClientError::NotFound(id))
    }
}
