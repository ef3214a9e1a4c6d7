//! Orrery HTTP server binary.
//!
//! Entry point for the content-generation REST API. Reads configuration
//! from the environment, wires the upstream generator, and serves the
//! router.
//!
//! # Usage
//!
//! ```bash
//! OPENAI_API_KEY=sk-... PORT=8080 cargo run --bin orrery-server
//! ```
//!
//! Without `OPENAI_API_KEY` the server still starts, and the generation
//! endpoint answers 500 per its contract.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use orrery::config::Config;
use orrery::content::{ContentGenerator, OpenAiGenerator};
use orrery::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    info!("Starting orrery HTTP server");

    let config = Config::from_env();

    let generator: Option<Arc<dyn ContentGenerator>> = match &config.openai_api_key {
        Some(key) => Some(Arc::new(OpenAiGenerator::new(
            key.clone(),
            config.openai_model.clone(),
        ))),
        None => {
            warn!("OPENAI_API_KEY not set; generation endpoint will report 500");
            None
        }
    };

    let state = AppState::new(generator);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
