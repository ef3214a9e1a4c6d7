//! Selection-aware content loading.
//!
//! A [`ContentSession`] tracks which planet is currently selected and
//! publishes content-state transitions over a watch channel. Changing the
//! selection aborts the previous fetch task, and a fetch commits its result
//! only while its selection token is still current, so a stale response can
//! never update state for a planet that is no longer selected.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{ContentService, Source};
use crate::api::{Planet, PlanetContent};

/// Observable state of the current selection's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState {
    /// No planet selected.
    Idle,
    /// Looking for a cached entry.
    CheckingCache,
    /// Cache missed; a generation request is outstanding.
    Loading,
    /// Content is available. `source` distinguishes a cache hit, a fresh
    /// generation, and the error fallback.
    Ready {
        content: PlanetContent,
        source: Source,
    },
}

impl ContentState {
    fn source(&self) -> Option<Source> {
        match self {
            Self::Ready { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// True when this state is the absorbed-failure fallback.
    pub fn is_fallback(&self) -> bool {
        self.source() == Some(Source::Fallback)
    }
}

/// Shared pieces a fetch task needs to publish its result.
#[derive(Clone)]
struct Publisher {
    state_tx: watch::Sender<ContentState>,
    selection: Arc<AtomicU64>,
}

impl Publisher {
    /// Publish `state` unless the selection has moved on since `token`.
    fn commit(&self, token: u64, state: ContentState) {
        if self.selection.load(Ordering::SeqCst) == token {
            self.state_tx.send_replace(state);
        }
    }
}

/// Tracks the selected planet and drives content fetches for it.
pub struct ContentSession {
    service: ContentService,
    publisher: Publisher,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ContentSession {
    pub fn new(service: ContentService) -> Self {
        let (state_tx, _) = watch::channel(ContentState::Idle);
        Self {
            service,
            publisher: Publisher {
                state_tx,
                selection: Arc::new(AtomicU64::new(0)),
            },
            task: Mutex::new(None),
        }
    }

    /// Subscribe to content-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.publisher.state_tx.subscribe()
    }

    /// Change the selection. `None` clears it back to idle.
    ///
    /// Any outstanding fetch for the previous selection is aborted; its
    /// result, if it already raced past the abort, is discarded at commit
    /// time by the token check.
    pub fn select(&self, planet: Option<Planet>) {
        let token = self.begin_selection();

        let Some(planet) = planet else {
            self.publisher.commit(token, ContentState::Idle);
            return;
        };

        self.publisher.commit(token, ContentState::CheckingCache);
        self.spawn_fetch(token, planet, false);
    }

    /// Regenerate content for `planet`, bypassing the cache.
    pub fn regenerate(&self, planet: Planet) {
        let token = self.begin_selection();
        self.publisher.commit(token, ContentState::Loading);
        self.spawn_fetch(token, planet, true);
    }

    /// Wait until the current fetch, if any, has finished.
    pub async fn settled(&self) {
        let task = self.task.lock().take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }

    fn begin_selection(&self) -> u64 {
        let token = self.publisher.selection.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
        token
    }

    fn spawn_fetch(&self, token: u64, planet: Planet, bypass_cache: bool) {
        let service = self.service.clone();
        let publisher = self.publisher.clone();

        let handle = tokio::spawn(async move {
            let (content, source) = if bypass_cache {
                service.generate_and_cache(&planet).await
            } else {
                match service.cache().get(&planet.url).await {
                    Ok(Some(content)) => (content, Source::Cache),
                    _ => {
                        publisher.commit(token, ContentState::Loading);
                        service.generate_and_cache(&planet).await
                    }
                }
            };

            publisher.commit(token, ContentState::Ready { content, source });
        });

        *self.task.lock() = Some(handle);
    }
}
