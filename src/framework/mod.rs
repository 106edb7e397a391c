//! Generic actor-backed record stores.
//!
//! This module provides the building blocks used by every stateful collaborator of the
//! registration pipeline.
//!
//! # Main Components
//!
//! - [`StoredRecord`] - Trait that stored types implement
//! - [`StoreActor`] - Actor that owns one collection of records
//! - [`StoreClient`] - Cloneable async handle to an actor
//! - [`StoreError`] - Common error type
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning actors.

pub mod core;
pub mod mock;

pub use self::core::*;
