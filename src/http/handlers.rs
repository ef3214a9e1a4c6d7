//! HTTP handlers for the REST API.

use axum::{extract::State, Json};
use tracing::{error, info};

use super::dto::{GenerateContentRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::PlanetContent;
use crate::content::TemplateGenerator;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/generate-planet-content
///
/// Proxies the language-model API. Contract:
/// - 400 when the planet name is missing or empty;
/// - 500 when no upstream credential is configured;
/// - 200 with a name-templated fallback body when the upstream fails
///   (graceful degradation, never an error status);
/// - 200 with the generated `{tagline, travelGuide, emoji}` otherwise.
pub async fn generate_planet_content(
    State(state): State<AppState>,
    body: Json<serde_json::Value>,
) -> HandlerResult<PlanetContent> {
    // The body is validated by hand so any malformed shape maps onto the
    // contract's 400 rather than an extractor-specific rejection.
    let request: GenerateContentRequest = serde_json::from_value(body.0)
        .map_err(|_| AppError::BadRequest("Invalid planet data provided".to_string()))?;

    let planet = request.planet;
    if planet.name.trim().is_empty() {
        return Err(AppError::BadRequest("Invalid planet data provided".to_string()));
    }

    let Some(generator) = &state.generator else {
        return Err(AppError::Internal(
            "OpenAI API key not configured on server".to_string(),
        ));
    };

    match generator.generate(&planet).await {
        Ok(content) => {
            info!(planet = %planet.name, "generated planet content");
            Ok(Json(content))
        }
        Err(e) => {
            error!(planet = %planet.name, error = %e, "generation failed, serving fallback");
            Ok(Json(TemplateGenerator::content_for_name(&planet.name)))
        }
    }
}

/// Fallback for known routes hit with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
