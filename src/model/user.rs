use crate::model::{Client, ClientId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Raw registration data as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

impl RegistrationInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client_id: impl Into<ClientId>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client_id: client_id.into(),
        }
    }
}

/// A user record, either as a draft inside one registration call or as stored.
///
/// # Store
/// Drafts carry `id: None`. The user store assigns a sequential [`UserId`] when the
/// record is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub has_credit_limit: bool,
    pub credit_limit: i64,
}

impl User {
    /// Builds a fresh draft from validated input and the resolved client.
    ///
    /// # Notes
    /// The credit fields start cleared; the selected credit-limit strategy fills them in.
    pub fn draft(input: &RegistrationInput, client: Client) -> Self {
        Self {
            id: None,
            first_name: input.first_name.clone(),
            surname: input.last_name.clone(),
            email: input.email.clone(),
            date_of_birth: input.date_of_birth,
            client,
            has_credit_limit: false,
            credit_limit: 0,
        }
    }
}
