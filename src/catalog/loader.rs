//! Single-flight planet loading with manual refetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use super::{CatalogClient, CatalogError, CatalogResult};
use crate::api::Planet;

/// Outcome of a [`CatalogLoader::load`] call.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The load completed and its result is still current.
    Loaded(Vec<Planet>),
    /// A refetch was requested while this load was in flight; its result was
    /// discarded and the caller should load again.
    Superseded,
}

/// Coordinates catalog loads so the same logical load never runs twice
/// concurrently.
///
/// `load` holds an async mutex for the duration of the pagination, so a
/// second caller awaiting a load simply queues behind the first. `refetch`
/// bumps a generation token; a load that finishes under a stale token
/// reports [`LoadOutcome::Superseded`] instead of returning planets fetched
/// for an abandoned generation.
pub struct CatalogLoader {
    client: CatalogClient,
    in_flight: Mutex<()>,
    generation: AtomicU64,
}

impl CatalogLoader {
    pub fn new(client: CatalogClient) -> Arc<Self> {
        Arc::new(Self {
            client,
            in_flight: Mutex::new(()),
            generation: AtomicU64::new(0),
        })
    }

    /// Current refetch generation token.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Request that the next (or current) load start over from scratch.
    pub fn refetch(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, "catalog refetch requested");
        generation
    }

    /// Run the full sequential pagination under the single-flight guard.
    pub async fn load(&self) -> Result<LoadOutcome, CatalogError> {
        let _guard = self.in_flight.lock().await;
        let started_at = self.generation();

        let planets = self.client.fetch_all_planets().await?;

        if self.generation() != started_at {
            info!(started_at, "discarding superseded catalog load");
            return Ok(LoadOutcome::Superseded);
        }

        Ok(LoadOutcome::Loaded(planets))
    }

    /// Load, restarting automatically whenever a refetch supersedes the
    /// in-flight pagination.
    pub async fn load_latest(&self) -> CatalogResult<Vec<Planet>> {
        loop {
            match self.load().await? {
                LoadOutcome::Loaded(planets) => return Ok(planets),
                LoadOutcome::Superseded => continue,
            }
        }
    }
}
