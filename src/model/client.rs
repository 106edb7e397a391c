use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u32);

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "client_{}", self.0)
    }
}

/// A client organisation users register under.
///
/// The `name` doubles as the classification key that selects a credit-limit strategy
/// (see [`StrategyRegistry`](crate::credit::StrategyRegistry)). It is not guaranteed to be
/// a human-friendly display name.
///
/// # Store
/// Clients are keyed by their own `id`, chosen by whoever registers them, so the
/// directory never invents identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    /// Creates a new Client instance.
    ///
    /// # Arguments
    /// * `id` - Identifier the directory will store the client under
    /// * `name` - Classification name
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
