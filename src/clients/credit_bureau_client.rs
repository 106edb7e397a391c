//! # Credit Bureau Client
//!
//! Wraps a `StoreClient<CreditProfile>` and exposes it as a [`CreditService`].
use crate::clients::{CreditService, RecordClient};
use crate::credit_bureau::CreditError;
use crate::framework::{StoreClient, StoreError};
use crate::model::{CreditIdentity, CreditProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the credit bureau actor.
#[derive(Clone)]
pub struct CreditBureauClient {
    inner: StoreClient<CreditProfile>,
}

impl CreditBureauClient {
    pub fn new(inner: StoreClient<CreditProfile>) -> Self {
        Self { inner }
    }

    /// Puts a base credit limit on file for an identity.
    #[instrument(skip(self, profile), fields(credit_limit = profile.credit_limit))]
    pub async fn record_profile(&self, profile: CreditProfile) -> Result<(), CreditError> {
        debug!("Sending request");
        self.inner
            .insert(profile)
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }
}

fn map_store_error(e: StoreError) -> CreditError {
    match e {
        StoreError::Duplicate(key) => CreditError::AlreadyExists(key),
        StoreError::Record(source) => match source.downcast::<CreditError>() {
            Ok(credit) => *credit,
            Err(other) => CreditError::ActorCommunicationError(other.to_string()),
        },
        other => CreditError::ActorCommunicationError(other.to_string()),
    }
}

#[async_trait]
impl RecordClient<CreditProfile> for CreditBureauClient {
    type Error = CreditError;

    fn inner(&self) -> &StoreClient<CreditProfile> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        map_store_error(e)
    }
}

#[async_trait]
impl CreditService for CreditBureauClient {
    #[instrument(skip(self))]
    async fn get_credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, CreditError> {
        debug!("Sending request");
        let identity = CreditIdentity::new(first_name, last_name, date_of_birth);
        match self.inner.get(identity.clone()).await.map_err(map_store_error)? {
            Some(profile) => Ok(profile.credit_limit),
            None => Err(CreditError::NoCreditRecord(identity.to_string())),
        }
    }
}
