//! # Credit Bureau
//!
//! An in-process stand-in for the external credit-scoring service: a store of
//! [`CreditProfile`] records keyed by [`CreditIdentity`](crate::model::CreditIdentity).
//!
//! Hosts that talk to a real bureau implement [`CreditService`](crate::clients::CreditService)
//! themselves; the registration pipeline only sees that trait.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CreditBureauClient;
use crate::framework::StoreActor;
use crate::model::CreditProfile;

/// Creates a new credit bureau actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<CreditProfile>, CreditBureauClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, CreditBureauClient::new(generic_client))
}
