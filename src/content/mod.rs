//! AI travel-content generation with cache-through persistence.
//!
//! The read path checks the persistent cache first; on miss it calls the
//! generator and writes the result back before returning. Generation is
//! optional enrichment, so every failure path degrades silently into fixed
//! fallback content and is never surfaced as an error.

pub mod generator;
pub mod session;

pub use generator::{ContentGenerator, GenerateError, OpenAiGenerator, TemplateGenerator};
pub use session::{ContentSession, ContentState};

use std::sync::Arc;

use tracing::warn;

use crate::api::{Planet, PlanetContent};
use crate::store::ContentCache;

/// Fixed client-side fallback content, used when generation fails.
pub fn fallback_content() -> PlanetContent {
    PlanetContent {
        emoji: "🌍".to_string(),
        tagline: "An Epic Galactic Destination Awaits".to_string(),
        travel_guide: "Discover the wonders of this incredible planet! From breathtaking \
            landscapes to unique cultures, this destination offers unforgettable experiences. \
            Whether you're seeking adventure, relaxation, or cultural immersion, you'll find it \
            all here. Pack your bags and prepare for a journey across the stars!"
            .to_string(),
    }
}

/// Where a piece of served content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Generated,
    Fallback,
}

/// Cache-through content service.
#[derive(Clone)]
pub struct ContentService {
    cache: ContentCache,
    generator: Arc<dyn ContentGenerator>,
}

impl ContentService {
    pub fn new(cache: ContentCache, generator: Arc<dyn ContentGenerator>) -> Self {
        Self { cache, generator }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Content for a planet: cached if present, freshly generated otherwise.
    ///
    /// Generated content is written back to the cache; fallback content is
    /// not, so the next request tries the generator again.
    pub async fn content_for(&self, planet: &Planet) -> (PlanetContent, Source) {
        match self.cache.get(&planet.url).await {
            Ok(Some(content)) => return (content, Source::Cache),
            Ok(None) => {}
            Err(e) => warn!(planet = %planet.name, error = %e, "content cache read failed"),
        }

        self.generate_and_cache(planet).await
    }

    /// Regenerate unconditionally, bypassing the cache; overwrites the
    /// cached entry on success.
    pub async fn regenerate(&self, planet: &Planet) -> (PlanetContent, Source) {
        self.generate_and_cache(planet).await
    }

    pub(crate) async fn generate_and_cache(&self, planet: &Planet) -> (PlanetContent, Source) {
        match self.generator.generate(&planet.summary()).await {
            Ok(content) => {
                if let Err(e) = self.cache.put(&planet.url, &content).await {
                    warn!(planet = %planet.name, error = %e, "failed to cache generated content");
                }
                (content, Source::Generated)
            }
            Err(e) => {
                warn!(planet = %planet.name, error = %e, "content generation failed, serving fallback");
                (fallback_content(), Source::Fallback)
            }
        }
    }
}
