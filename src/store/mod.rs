//! Key-value persistence behind an injected trait.
//!
//! The browser original leaned on `localStorage` as an ad hoc cache and
//! config store. Here that surface is an explicit [`KeyValueStore`] trait so
//! the content cache and preference components are testable without a real
//! persistence backend. Two implementations ship: an in-memory map for tests
//! and local runs, and a single-document JSON file store.
//!
//! Writes are idempotent, last write wins, keyed by entity identity; no
//! locking discipline is needed beyond each backend's own interior mutex.

pub mod cache;
pub mod error;
pub mod file;
pub mod memory;
pub mod prefs;

pub use cache::ContentCache;
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use prefs::{Preferences, ViewMode};

use async_trait::async_trait;

/// Abstract string key-value store.
///
/// Values are opaque strings; callers layer their own (de)serialization on
/// top. Implementations must be `Send + Sync`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the value under `key`; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;

    /// Enumerate all stored keys, in no particular order.
    async fn keys(&self) -> StoreResult<Vec<String>>;
}
