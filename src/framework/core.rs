//! # Record Store Actor
//!
//! This module defines the generic building blocks for the in-process stores that back
//! the registration collaborators (client directory, user store, credit bureau).
//!
//! ## Key Types
//!
//! - [`StoredRecord`]: The trait every stored type implements.
//! - [`StoreActor`]: The actor that owns one collection of records.
//! - [`StoreClient`]: The cloneable handle used to talk to an actor.
//! - [`StoreError`]: Transport and storage failures.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be kept by a [`StoreActor`].
///
/// # Keys
/// The actor hands [`StoredRecord::assign_key`] a sequence number that starts at 1 and
/// advances after every successful insert. Records with a natural key (a client id, a
/// credit identity) ignore it and derive the key from the draft instead.
pub trait StoredRecord: Clone + Send + Sync + Debug + 'static {
    /// Unique key of a stored record.
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload accepted by `insert`.
    type Draft: Send + Sync + Debug;

    /// Error raised when a draft cannot be turned into a record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the key the draft will be stored under.
    fn assign_key(seq: u32, draft: &Self::Draft) -> Self::Key;

    /// Construct the full record from its key and draft.
    fn from_draft(key: Self::Key, draft: Self::Draft) -> Result<Self, Self::Error>;
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Duplicate key: {0}")]
    Duplicate(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent from a [`StoreClient`] to its [`StoreActor`].
///
/// Stores are append-only: the registration flow only ever adds records and reads them
/// back, so there are no update or delete requests.
#[derive(Debug)]
pub enum StoreRequest<T: StoredRecord> {
    Insert {
        draft: T::Draft,
        respond_to: Response<T::Key>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// The actor that owns a collection of records.
///
/// Each actor processes its messages sequentially in its own task, so the `store`
/// needs no lock.
pub struct StoreActor<T: StoredRecord> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Key, T>,
    insertion_order: Vec<T::Key>,
    next_seq: u32,
}

impl<T: StoredRecord> StoreActor<T> {
    /// Creates a new actor and the client connected to it.
    ///
    /// `buffer_size` is the channel capacity and must be non-zero.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_seq: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "User" instead of "user_onboarding::model::user::User"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { draft, respond_to } => {
                    debug!(record_type, ?draft, "Insert");
                    let _ = respond_to.send(self.insert(record_type, draft));
                }
                StoreRequest::Get { key, respond_to } => {
                    let item = self.store.get(&key).cloned();
                    debug!(record_type, %key, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    let items = self
                        .insertion_order
                        .iter()
                        .filter_map(|key| self.store.get(key).cloned())
                        .collect::<Vec<_>>();
                    debug!(record_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }

    fn insert(&mut self, record_type: &str, draft: T::Draft) -> Result<T::Key, StoreError> {
        let key = T::assign_key(self.next_seq, &draft);
        if self.store.contains_key(&key) {
            warn!(record_type, %key, "Duplicate key");
            return Err(StoreError::Duplicate(key.to_string()));
        }

        let record = T::from_draft(key.clone(), draft).map_err(|e| {
            warn!(record_type, error = %e, "Insert failed");
            StoreError::Record(Box::new(e))
        })?;

        self.next_seq += 1;
        self.store.insert(key.clone(), record);
        self.insertion_order.push(key.clone());
        info!(record_type, %key, size = self.store.len(), "Inserted");
        Ok(key)
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A type-safe, cloneable handle to a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient<T: StoredRecord> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoredRecord> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, draft: T::Draft) -> Result<T::Key, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { draft, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { key, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Returns every record in insertion order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        slug: String,
        body: String,
    }

    #[derive(Debug)]
    struct NoteDraft {
        slug: Option<String>,
        body: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("empty body")]
    struct EmptyBody;

    impl StoredRecord for Note {
        type Key = String;
        type Draft = NoteDraft;
        type Error = EmptyBody;

        fn assign_key(seq: u32, draft: &NoteDraft) -> String {
            draft.slug.clone().unwrap_or_else(|| format!("note_{seq}"))
        }

        fn from_draft(key: String, draft: NoteDraft) -> Result<Self, EmptyBody> {
            if draft.body.is_empty() {
                return Err(EmptyBody);
            }
            let id = key.len() as u32;
            Ok(Self {
                id,
                slug: key,
                body: draft.body,
            })
        }
    }

    fn draft(slug: Option<&str>, body: &str) -> NoteDraft {
        NoteDraft {
            slug: slug.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_and_list_in_order() {
        let (actor, client) = StoreActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let first = client.insert(draft(None, "hello")).await.unwrap();
        let second = client.insert(draft(Some("pinned"), "world")).await.unwrap();
        let third = client.insert(draft(None, "again")).await.unwrap();
        assert_eq!(first, "note_1");
        assert_eq!(second, "pinned");
        assert_eq!(third, "note_3");

        let note = client.get("pinned".to_string()).await.unwrap().unwrap();
        assert_eq!(note.body, "world");
        assert!(client.get("missing".to_string()).await.unwrap().is_none());

        let slugs: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.slug)
            .collect();
        assert_eq!(slugs, vec!["note_1", "pinned", "note_3"]);
    }

    #[tokio::test]
    async fn test_duplicate_key_is_rejected() {
        let (actor, client) = StoreActor::<Note>::new(10);
        tokio::spawn(actor.run());

        client.insert(draft(Some("a"), "one")).await.unwrap();
        let err = client.insert(draft(Some("a"), "two")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(ref key) if key == "a"));

        let stored = client.get("a".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.body, "one");
    }

    #[tokio::test]
    async fn test_failed_insert_does_not_consume_sequence() {
        let (actor, client) = StoreActor::<Note>::new(10);
        tokio::spawn(actor.run());

        let err = client.insert(draft(None, "")).await.unwrap_err();
        assert!(matches!(err, StoreError::Record(_)));

        let key = client.insert(draft(None, "ok")).await.unwrap();
        assert_eq!(key, "note_1");
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = StoreActor::<Note>::new(10);
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert!(matches!(err, StoreError::ActorClosed));
    }
}
