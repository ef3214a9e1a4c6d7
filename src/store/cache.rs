//! Planet content cache over a key-value store.

use std::sync::Arc;

use tracing::warn;

use super::{KeyValueStore, StoreResult};
use crate::api::PlanetContent;

/// Key prefix for cached planet content, suffixed with the planet URL.
pub const CONTENT_KEY_PREFIX: &str = "planet-content-";

/// Cache of [`PlanetContent`] entries keyed by planet URL.
///
/// One entry per planet, overwritten on regeneration, never expired
/// automatically. A malformed cached entry is treated as a miss rather than
/// an error so a bad write can never wedge the content flow.
#[derive(Clone)]
pub struct ContentCache {
    store: Arc<dyn KeyValueStore>,
}

impl ContentCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(planet_url: &str) -> String {
        format!("{CONTENT_KEY_PREFIX}{planet_url}")
    }

    /// Look up cached content for the planet identified by `planet_url`.
    pub async fn get(&self, planet_url: &str) -> StoreResult<Option<PlanetContent>> {
        let Some(raw) = self.store.get(&Self::key(planet_url)).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                warn!(planet_url, error = %e, "discarding malformed cached content");
                Ok(None)
            }
        }
    }

    /// Store content for a planet, replacing any previous entry.
    pub async fn put(&self, planet_url: &str, content: &PlanetContent) -> StoreResult<()> {
        let raw = serde_json::to_string(content)?;
        self.store.set(&Self::key(planet_url), &raw).await
    }

    /// URLs of all planets with a cached entry.
    pub async fn cached_planet_urls(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .store
            .keys()
            .await?
            .into_iter()
            .filter_map(|k| k.strip_prefix(CONTENT_KEY_PREFIX).map(str::to_string))
            .collect())
    }
}
