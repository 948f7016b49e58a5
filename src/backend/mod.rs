mod json_store;
mod interface;
mod memory;
mod seed;

pub use interface::{UserStore, StoreResult, StoreError};
pub use json_store::JsonStore;
pub use memory::MemoryStore;
pub use seed::{SeedSource, HttpSeed, initialize_if_absent, DEFAULT_SEED_URL};
