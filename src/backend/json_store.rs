use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::interface::{StoreResult, UserStore};
use crate::core::Roster;

/// File-backed store: one pretty-printed JSON array of user records.
pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        JsonStore { path: path.as_ref().to_owned() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonStore {
    fn read_all(&self) -> StoreResult<Roster> {
        let content = fs::read_to_string(&self.path)?;
        let roster = serde_json::from_str(&content)?;
        return Ok(roster);
    }

    // Whole-file overwrite; not atomic, a crash mid-write can leave a
    // truncated file behind.
    fn write_all(&self, roster: &Roster) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(roster)?;
        fs::write(&self.path, content)?;
        return Ok(());
    }

    fn is_initialized(&self) -> bool {
        self.path.exists()
    }
}
