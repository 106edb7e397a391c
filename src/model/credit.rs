use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The identity a credit bureau scores: full name plus date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditIdentity {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl CreditIdentity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
        }
    }
}

impl Display for CreditIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.date_of_birth
        )
    }
}

/// A base credit limit on file for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditProfile {
    pub identity: CreditIdentity,
    pub credit_limit: i64,
}

impl CreditProfile {
    pub fn new(identity: CreditIdentity, credit_limit: i64) -> Self {
        Self {
            identity,
            credit_limit,
        }
    }
}
