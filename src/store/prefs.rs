//! User preferences persisted across sessions.
//!
//! Simple JSON-serialized values under the original's `swapi-*` keys, no
//! schema versioning, no expiry. Unreadable or malformed values fall back to
//! the defaults; preferences are never worth failing over.

use serde::{Deserialize, Serialize};

use super::KeyValueStore;

pub const KEY_VIEW_MODE: &str = "swapi-viewMode";
pub const KEY_SEARCH_QUERY: &str = "swapi-searchQuery";
pub const KEY_SELECTED_CLIMATES: &str = "swapi-selectedClimates";
pub const KEY_SHOW_ALL_LABELS: &str = "swapi-showAllLabels";

/// Which planet view is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Explore,
}

/// User-owned filter and view state, independent of planet data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub view_mode: ViewMode,
    pub search_query: String,
    pub selected_climates: Vec<String>,
    pub show_all_labels: bool,
}

impl Preferences {
    /// Load preferences, substituting defaults for missing or bad values.
    pub async fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            view_mode: read_json(store, KEY_VIEW_MODE).await.unwrap_or_default(),
            search_query: read_json(store, KEY_SEARCH_QUERY).await.unwrap_or_default(),
            selected_climates: read_json(store, KEY_SELECTED_CLIMATES)
                .await
                .unwrap_or_default(),
            show_all_labels: read_json(store, KEY_SHOW_ALL_LABELS)
                .await
                .unwrap_or_default(),
        }
    }

    /// Persist all preference keys; last write wins.
    pub async fn save(&self, store: &dyn KeyValueStore) -> crate::store::StoreResult<()> {
        write_json(store, KEY_VIEW_MODE, &self.view_mode).await?;
        write_json(store, KEY_SEARCH_QUERY, &self.search_query).await?;
        write_json(store, KEY_SELECTED_CLIMATES, &self.selected_climates).await?;
        write_json(store, KEY_SHOW_ALL_LABELS, &self.show_all_labels).await?;
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    let raw = store.get(key).await.ok()??;
    serde_json::from_str(&raw).ok()
}

async fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> crate::store::StoreResult<()> {
    store.set(key, &serde_json::to_string(value)?).await
}
