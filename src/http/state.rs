//! Application state for the HTTP server.

use std::sync::Arc;

use crate::content::ContentGenerator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream content generator; `None` when no API key is configured,
    /// which the generation endpoint reports as a 500.
    pub generator: Option<Arc<dyn ContentGenerator>>,
}

impl AppState {
    pub fn new(generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self { generator }
    }
}
