//! [`StoredRecord`] implementation for [`CreditProfile`].

use crate::credit_bureau::CreditError;
use crate::framework::StoredRecord;
use crate::model::{CreditIdentity, CreditProfile};

impl StoredRecord for CreditProfile {
    type Key = CreditIdentity;
    type Draft = CreditProfile;
    type Error = CreditError;

    fn assign_key(_seq: u32, draft: &CreditProfile) -> CreditIdentity {
        draft.identity.clone()
    }

    fn from_draft(identity: CreditIdentity, draft: CreditProfile) -> Result<Self, CreditError> {
        if draft.credit_limit < 0 {
            return Err(CreditError::NegativeLimit {
                identity: identity.to_string(),
                limit: draft.credit_limit,
            });
        }
        Ok(draft)
    }
}
