use crate::framework::{StoreClient, StoreError, StoredRecord};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// Implementors wrap a [`StoreClient`] and translate [`StoreError`] into their own
/// error type; `get` and `list` come for free.
#[async_trait]
pub trait RecordClient<T: StoredRecord>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }

    /// Fetch every record in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
