//! [`StoredRecord`] implementation for [`Client`].

use crate::client_store::ClientError;
use crate::framework::StoredRecord;
use crate::model::{Client, ClientId};

impl StoredRecord for Client {
    type Key = ClientId;
    type Draft = Client;
    type Error = ClientError;

    /// Clients keep the id they were registered with.
    fn assign_key(_seq: u32, draft: &Client) -> ClientId {
        draft.id
    }

    fn from_draft(_id: ClientId, draft: Client) -> Result<Self, ClientError> {
        Ok(draft)
    }
}
