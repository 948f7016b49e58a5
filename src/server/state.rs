use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::{SeedSource, UserStore};

/// One lock serializes every read-modify-write cycle against the store.
/// Without it two concurrent writers race and the last write wins.
pub type SharedStore = Arc<Mutex<Box<dyn UserStore + Send>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub seed: Arc<dyn SeedSource + Send + Sync>
}

impl AppState {
    pub fn new(
        store: impl UserStore + Send + 'static,
        seed: impl SeedSource + Send + Sync + 'static
    ) -> AppState {
        AppState {
            store: Arc::new(Mutex::new(Box::new(store))),
            seed: Arc::new(seed)
        }
    }
}
