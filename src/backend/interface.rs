use std::io;

use thiserror::Error;

use crate::core::Roster;

/// Failures surfaced by a store instead of silently handing back an empty
/// collection. Handlers decide how much of this reaches the client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Io(#[from] io::Error),
    #[error("store file holds invalid JSON: {0}")]
    Parse(#[from] serde_json::Error)
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read/write access to the persisted collection. The whole collection is
/// loaded and written back in one piece; there is no partial update.
pub trait UserStore {
    fn read_all(&self) -> StoreResult<Roster>;
    fn write_all(&self, roster: &Roster) -> StoreResult<()>;
    /// Whether the backing storage already holds a collection. First-run
    /// seeding only happens when this is false.
    fn is_initialized(&self) -> bool;
}
