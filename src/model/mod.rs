//! Pure data structures (DTOs) shared by the stores and the registration pipeline.
//!
//! The stored types implement [`StoredRecord`](crate::framework::StoredRecord) in their
//! respective store modules.

pub mod client;
pub mod credit;
pub mod user;

pub use client::*;
pub use credit::*;
pub use user::*;
