mod core;
mod backend;
pub mod server;

pub use crate::core::{Roster, UserRecord, UserDraft, UserId, RosterError};
pub use crate::core::{record, roster};
pub use crate::backend::{
    JsonStore, MemoryStore, UserStore, StoreError, StoreResult,
    SeedSource, HttpSeed, initialize_if_absent, DEFAULT_SEED_URL
};
