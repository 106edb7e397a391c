//! # User Store
//!
//! The persistence sink for accepted registrations. Users are keyed by a sequential
//! [`UserId`](crate::model::UserId) assigned on insert.
//!
//! Persisting is append-only and never deduplicates: two identical drafts become two
//! records.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserStoreClient;
use crate::framework::StoreActor;
use crate::model::User;

/// Creates a new user store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<User>, UserStoreClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, UserStoreClient::new(generic_client))
}
