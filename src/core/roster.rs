use serde::{Serialize, Deserialize};

use crate::core::error::{RosterError, RosterResult};
use crate::core::record::{UserId, UserRecord};

/// The whole user collection, as one in-memory array. Invariant: no two
/// records share an id. There is no ordering invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    users: Vec<UserRecord>
}

impl Roster {
    pub fn new() -> Roster {
        Roster { users: Vec::new() }
    }

    pub fn from_users(users: Vec<UserRecord>) -> Roster {
        Roster { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn find(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Append a record. Fails if the id is already taken, leaving the
    /// collection untouched.
    pub fn add(&mut self, record: UserRecord) -> RosterResult<()> {
        if self.find(record.id).is_some() {
            return Err(RosterError::DuplicateId(record.id));
        }
        self.users.push(record);
        return Ok(());
    }

    /// Replace the record stored under `id` in place. The stored id always
    /// stays `id`, whatever the replacement carries.
    pub fn replace(&mut self, id: UserId, mut record: UserRecord) -> RosterResult<&UserRecord> {
        let slot = self.users.iter_mut()
            .find(|user| user.id == id)
            .ok_or(RosterError::UnknownId(id))?;
        record.id = id;
        *slot = record;
        return Ok(slot);
    }

    pub fn remove(&mut self, id: UserId) -> RosterResult<UserRecord> {
        let position = self.users.iter()
            .position(|user| user.id == id)
            .ok_or(RosterError::UnknownId(id))?;
        return Ok(self.users.remove(position));
    }
}
