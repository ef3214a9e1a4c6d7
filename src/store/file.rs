//! File-backed store implementation.
//!
//! Persists the whole key space as one JSON object on disk, preserving the
//! exact key layout the browser original kept in `localStorage`. Every write
//! rewrites the document; the expected key count (dozens of planets plus a
//! handful of preference keys) makes that a non-issue.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{KeyValueStore, StoreError, StoreResult};

/// [`KeyValueStore`] persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // BTreeMap keeps the on-disk document diff-stable.
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file starts empty; an unreadable or corrupt document is an
    /// error, since silently discarding a user's cache would be worse.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }
}
