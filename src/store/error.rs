//! Error types for store operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the backing document.
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing document could not be decoded.
    #[error("store document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
