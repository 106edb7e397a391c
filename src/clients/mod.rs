//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient) and the
//! collaborator traits they implement.

pub mod client_directory_client;
pub mod credit_bureau_client;
pub mod record_client;
pub mod traits;
pub mod user_store_client;

pub use client_directory_client::*;
pub use credit_bureau_client::*;
pub use record_client::*;
pub use traits::*;
pub use user_store_client::*;
