//! # Client Directory Store
//!
//! In-process directory of [`Client`] records, keyed by [`ClientId`](crate::model::ClientId).
//!
//! ## Structure
//!
//! - [`entity`] - [`StoredRecord`](crate::framework::StoredRecord) implementation for [`Client`]
//! - [`error`] - [`ClientError`] type
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use user_onboarding::client_store;
//! use user_onboarding::clients::ClientDirectory;
//! use user_onboarding::model::{Client, ClientId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, directory) = client_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     directory.register_client(Client::new(1, "ImportantClient")).await?;
//!     let client = directory.get_by_id(ClientId(1)).await?;
//!     assert_eq!(client.name, "ImportantClient");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ClientDirectoryClient;
use crate::framework::StoreActor;
use crate::model::Client;

/// Creates a new client directory actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Client>, ClientDirectoryClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, ClientDirectoryClient::new(generic_client))
}
