//! Error types for catalog operations.

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Terminal failure of a catalog load.
///
/// Catalog errors fail loudly: the caller surfaces them as a page-level
/// error state rather than degrading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("failed to decode catalog response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
