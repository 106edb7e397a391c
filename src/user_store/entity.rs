//! [`StoredRecord`] implementation for [`User`].

use crate::framework::StoredRecord;
use crate::model::{User, UserId};
use crate::user_store::UserError;

impl StoredRecord for User {
    type Key = UserId;
    type Draft = User;
    type Error = UserError;

    fn assign_key(seq: u32, _draft: &User) -> UserId {
        UserId(seq)
    }

    /// Stamps the assigned id onto the draft.
    fn from_draft(id: UserId, mut draft: User) -> Result<Self, UserError> {
        if let Some(existing) = draft.id {
            return Err(UserError::StorageError(format!(
                "draft already persisted as {existing}"
            )));
        }
        draft.id = Some(id);
        Ok(draft)
    }
}
