use std::sync::Mutex;

use crate::backend::interface::{StoreResult, UserStore};
use crate::core::{Roster, UserRecord};

/// In-memory store, mainly so tests can swap out the file-backed one.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Roster>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> MemoryStore {
        MemoryStore { inner: Mutex::new(Roster::from_users(users)) }
    }
}

impl UserStore for MemoryStore {
    fn read_all(&self) -> StoreResult<Roster> {
        Ok(self.inner.lock().expect("store mutex poisoned").clone())
    }

    fn write_all(&self, roster: &Roster) -> StoreResult<()> {
        *self.inner.lock().expect("store mutex poisoned") = roster.clone();
        return Ok(());
    }

    fn is_initialized(&self) -> bool {
        true
    }
}
