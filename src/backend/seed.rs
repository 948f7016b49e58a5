use anyhow::Context;
use async_trait::async_trait;

use crate::backend::interface::UserStore;
use crate::core::{Roster, UserRecord};

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Where the initial/default dataset comes from. The production source is
/// an HTTP fetch; tests substitute a canned collection.
#[async_trait]
pub trait SeedSource {
    async fn fetch(&self) -> anyhow::Result<Roster>;
}

pub struct HttpSeed {
    url: String,
    client: reqwest::Client
}

impl HttpSeed {
    pub fn new(url: impl Into<String>) -> HttpSeed {
        HttpSeed { url: url.into(), client: reqwest::Client::new() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SeedSource for HttpSeed {
    async fn fetch(&self) -> anyhow::Result<Roster> {
        let users: Vec<UserRecord> = self.client
            .get(&self.url)
            .send().await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("seed request to {} failed", self.url))?
            .json().await
            .with_context(|| "seed response is not a user collection")?;

        return Ok(Roster::from_users(users));
    }
}

/// On first run, when the store has no backing collection yet, fetch the
/// seed collection and persist it. Returns whether seeding happened.
pub async fn initialize_if_absent(
    store: &dyn UserStore,
    seed: &(dyn SeedSource + Sync)
) -> anyhow::Result<bool> {
    if store.is_initialized() {
        return Ok(false);
    }

    let roster = seed.fetch().await?;
    store.write_all(&roster)
        .with_context(|| "failed to persist seed collection")?;
    return Ok(true);
}
