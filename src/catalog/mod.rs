//! Paginated SWAPI catalog client.
//!
//! [`CatalogClient`] follows the listing's `next` links strictly
//! sequentially (each page's link depends on the prior response) and fans
//! out detail-resource fetches concurrently. [`CatalogLoader`] adds the
//! single-flight/refetch discipline the UI needs: at most one in-flight
//! logical load, and a manual refetch that restarts the whole pagination
//! from scratch.

pub mod error;
pub mod loader;

pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{Film, Person, Planet, PlanetPage};

/// Default public catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// HTTP client for the planet catalog and its detail resources.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for CatalogClient {
    /// Client against the public catalog at [`DEFAULT_BASE_URL`].
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch every page of the planet listing, concatenated in catalog
    /// order.
    ///
    /// Pages are fetched one at a time; any network, HTTP-status, or decode
    /// failure is terminal for the whole load. No partial results, no
    /// automatic retry.
    pub async fn fetch_all_planets(&self) -> CatalogResult<Vec<Planet>> {
        let mut planets = Vec::new();
        let mut next_url = Some(format!("{}/planets/", self.base_url));

        while let Some(url) = next_url {
            let page: PlanetPage = self.get_json(&url).await?;
            debug!(%url, page_size = page.results.len(), "fetched catalog page");
            planets.extend(page.results);
            next_url = page.next;
        }

        Ok(planets)
    }

    /// Fetch a single detail resource (person, film, ...) by URL.
    pub async fn fetch_resource<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        self.get_json(url).await
    }

    /// Fan out concurrent fetches for a batch of detail URLs.
    ///
    /// Results are joined once all settle; the first failure fails the whole
    /// batch. The caller localizes that error to the section that asked.
    pub async fn fetch_resources<T: DeserializeOwned>(
        &self,
        urls: &[String],
    ) -> CatalogResult<Vec<T>> {
        try_join_all(urls.iter().map(|url| self.fetch_resource::<T>(url))).await
    }

    /// Residents of a planet, fetched concurrently.
    pub async fn fetch_residents(&self, planet: &Planet) -> CatalogResult<Vec<Person>> {
        self.fetch_resources(&planet.residents).await
    }

    /// Films featuring a planet, fetched concurrently.
    pub async fn fetch_films(&self, planet: &Planet) -> CatalogResult<Vec<Film>> {
        self.fetch_resources(&planet.films).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
