//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::api::PlanetSummary;

// The success body is PlanetContent itself, serialized with its wire names
// (tagline / travelGuide / emoji).
pub use crate::api::PlanetContent;

/// Request body for the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub planet: PlanetSummary,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
