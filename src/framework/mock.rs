//! # Mock Store
//!
//! Utilities for testing code that talks to a [`StoreClient`] without spawning a real
//! [`StoreActor`](crate::framework::StoreActor).
//!
//! Use [`MockStore`] to queue expectations and canned responses, or [`create_mock_store`]
//! to get a client plus the raw request receiver.
//!
//! ```ignore
//! let mut clients = MockStore::<Client>::new();
//! clients.expect_get(ClientId(1)).return_ok(Some(Client::new(1, "ImportantClient")));
//!
//! let directory = ClientDirectoryClient::new(clients.client());
//! // ... exercise code using `directory` ...
//! clients.verify();
//! ```

use crate::framework::{StoreClient, StoreError, StoreRequest, StoredRecord};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock replies with.
enum Expectation<T: StoredRecord> {
    Insert {
        response: Result<T::Key, StoreError>,
    },
    Get {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking.
///
/// Requests are answered strictly in the order expectations were queued. A request that
/// does not match the next expectation (wrong kind, wrong key, or nothing queued) makes
/// the mock stop answering: the caller observes [`StoreError::ActorDropped`] and
/// [`MockStore::verify`] reports the mismatch.
pub struct MockStore<T: StoredRecord> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    inserted: Arc<Mutex<Vec<T::Draft>>>,
    mismatch: Arc<Mutex<Option<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredRecord> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredRecord> MockStore<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let inserted = Arc::new(Mutex::new(Vec::new()));
        let mismatch = Arc::new(Mutex::new(None));

        let task_expectations = expectations.clone();
        let task_inserted = inserted.clone();
        let task_mismatch = mismatch.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_expectations).pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Insert { draft, respond_to },
                        Some(Expectation::Insert { response }),
                    ) => {
                        lock(&task_inserted).push(draft);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        *lock(&task_mismatch) = Some(describe(&request));
                        return;
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            inserted,
            mismatch,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` request.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` request for `key`.
    pub fn expect_get(&mut self, key: T::Key) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            key,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the drafts received by `insert` so far.
    pub fn take_inserted(&self) -> Vec<T::Draft> {
        std::mem::take(&mut *lock(&self.inserted))
    }

    /// Verifies that every expectation was met and no unexpected request arrived.
    ///
    /// # Panics
    /// Panics when a request did not match, or when expectations remain queued.
    pub fn verify(&self) {
        if let Some(request) = lock(&self.mismatch).as_ref() {
            panic!("Unexpected request: {request}");
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

fn describe<T: StoredRecord>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::Insert { draft, .. } => format!("insert {draft:?}"),
        StoreRequest::Get { key, .. } => format!("get {key}"),
        StoreRequest::List { .. } => "list".to_string(),
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: StoredRecord> {
    expectations: Queue<T>,
}

impl<T: StoredRecord> InsertExpectationBuilder<T> {
    pub fn return_ok(self, key: T::Key) {
        lock(&self.expectations).push_back(Expectation::Insert { response: Ok(key) });
    }

    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back(Expectation::Insert {
            response: Err(error),
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoredRecord> {
    key: T::Key,
    expectations: Queue<T>,
}

impl<T: StoredRecord> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        lock(&self.expectations).push_back(Expectation::Get {
            key: self.key,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back(Expectation::Get {
            key: self.key,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoredRecord> {
    expectations: Queue<T>,
}

impl<T: StoredRecord> ListExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        lock(&self.expectations).push_back(Expectation::List {
            response: Ok(records),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Useful when a test needs to hold a request open, or inspect it before answering.
pub fn create_mock_store<T: StoredRecord>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an `insert`.
pub async fn next_insert<T: StoredRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Draft,
    tokio::sync::oneshot::Sender<Result<T::Key, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Client, ClientId};

    #[tokio::test]
    async fn test_raw_channel_insert() {
        let (client, mut receiver) = create_mock_store::<Client>(10);

        let insert_task =
            tokio::spawn(async move { client.insert(Client::new(7, "ImportantClient")).await });

        let (draft, responder) = next_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert_eq!(draft.name, "ImportantClient");
        responder.send(Ok(ClientId(7))).unwrap();

        let result = insert_task.await.unwrap();
        assert!(matches!(result, Ok(ClientId(7))));
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockStore::<Client>::new();
        mock.expect_insert().return_ok(ClientId(1));
        mock.expect_get(ClientId(1))
            .return_ok(Some(Client::new(1, "VeryImportantClient")));
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();
        let id = client.insert(Client::new(1, "VeryImportantClient")).await.unwrap();
        assert_eq!(id, ClientId(1));

        let fetched = client.get(ClientId(1)).await.unwrap().unwrap();
        assert_eq!(fetched.name, "VeryImportantClient");
        assert!(client.list().await.unwrap().is_empty());

        let drafts = mock.take_inserted();
        assert_eq!(drafts.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_reported() {
        let mock = MockStore::<Client>::new();

        let err = mock.client().get(ClientId(3)).await.unwrap_err();
        assert!(matches!(err, StoreError::ActorDropped));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    async fn test_wrong_key_is_a_mismatch() {
        let mut mock = MockStore::<Client>::new();
        mock.expect_get(ClientId(1)).return_ok(None);

        let err = mock.client().get(ClientId(2)).await.unwrap_err();
        assert!(matches!(err, StoreError::ActorDropped));
    }
}
