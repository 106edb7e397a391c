use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Why a registration was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    InvalidName,
    InvalidEmail,
    Underage,
    CreditLimitTooLow { limit: i64 },
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::InvalidName => write!(f, "first or last name is empty"),
            Rejection::InvalidEmail => write!(f, "email contains neither '@' nor '.'"),
            Rejection::Underage => write!(f, "applicant is under the minimum age"),
            Rejection::CreditLimitTooLow { limit } => {
                write!(f, "credit limit {limit} is below the minimum")
            }
        }
    }
}

/// Result of a registration that did not fail on a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    Registered(UserId),
    Rejected(Rejection),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered(_))
    }
}
