use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

use crate::backend::DEFAULT_SEED_URL;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    #[serde(default = "default_seed_url")]
    pub seed_url: String
}

fn default_store_path() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_seed_url() -> String {
    DEFAULT_SEED_URL.to_owned()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            store_path: default_store_path(),
            seed_url: default_seed_url()
        }
    }
}

impl ServerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// A missing config file is not an error; the defaults apply.
    pub fn read_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        if filepath.as_ref().exists() {
            return Self::read(filepath);
        }
        return Ok(Self::default());
    }
}
