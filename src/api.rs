//! Core data types shared across the crate.
//!
//! The catalog-facing types mirror the SWAPI wire format exactly: numeric
//! fields stay as strings because the catalog serves values like `"unknown"`
//! alongside digits, and re-interpreting them is a presentation concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::climate::ClimateColor;

/// A planet record as served by the catalog.
///
/// Immutable once fetched; identity is the [`url`](Planet::url) string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    /// Free text, possibly comma-separated (e.g. `"arid, hot"`).
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    /// URLs of resident (person) detail resources.
    pub residents: Vec<String>,
    /// URLs of film detail resources.
    pub films: Vec<String>,
    pub created: DateTime<Utc>,
    pub edited: DateTime<Utc>,
    /// Unique identifying URL of this record.
    pub url: String,
}

impl Planet {
    /// Climate tokens: the climate field split on commas, trimmed.
    pub fn climate_tokens(&self) -> Vec<&str> {
        self.climate.split(',').map(str::trim).collect()
    }

    /// The descriptive subset sent to the content generation endpoint.
    pub fn summary(&self) -> PlanetSummary {
        PlanetSummary {
            name: self.name.clone(),
            climate: self.climate.clone(),
            terrain: self.terrain.clone(),
            population: self.population.clone(),
            gravity: self.gravity.clone(),
            diameter: self.diameter.clone(),
        }
    }
}

/// One page of the paginated catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPage {
    pub count: u64,
    /// URL of the next page, or `None` on the last page.
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Planet>,
}

/// A resident record from the catalog's people endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub url: String,
}

/// A film record from the catalog's films endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub url: String,
}

/// Descriptive planet fields posted to the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetSummary {
    pub name: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub diameter: String,
}

/// Maximum tagline length in characters.
pub const TAGLINE_MAX_CHARS: usize = 60;
/// Maximum emoji field length in characters.
pub const EMOJI_MAX_CHARS: usize = 8;

/// Schema violation in a [`PlanetContent`] value.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentSchemaError {
    #[error("tagline must be 1-{TAGLINE_MAX_CHARS} characters, got {0}")]
    TaglineLength(usize),
    #[error("travel guide must be non-empty")]
    EmptyTravelGuide,
    #[error("emoji must be 1-{EMOJI_MAX_CHARS} characters, got {0}")]
    EmojiLength(usize),
}

/// AI-generated (or fallback) flavor content for a planet.
///
/// Field names on the wire are camelCase for compatibility with the
/// generation endpoint and the persisted cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetContent {
    /// Short, punchy tagline (1-60 characters).
    pub tagline: String,
    /// Travel-guide paragraph, non-empty.
    #[serde(rename = "travelGuide")]
    pub travel_guide: String,
    /// A single relevant emoji (1-8 characters).
    pub emoji: String,
}

impl PlanetContent {
    /// Validate the schema bounds, rejecting out-of-range field lengths.
    ///
    /// External responses are never trusted implicitly; every decoded value
    /// passes through here before it is cached or served.
    pub fn validate(&self) -> Result<(), ContentSchemaError> {
        let tagline_len = self.tagline.chars().count();
        if tagline_len == 0 || tagline_len > TAGLINE_MAX_CHARS {
            return Err(ContentSchemaError::TaglineLength(tagline_len));
        }
        if self.travel_guide.is_empty() {
            return Err(ContentSchemaError::EmptyTravelGuide);
        }
        let emoji_len = self.emoji.chars().count();
        if emoji_len == 0 || emoji_len > EMOJI_MAX_CHARS {
            return Err(ContentSchemaError::EmojiLength(emoji_len));
        }
        Ok(())
    }
}

/// Derived placement of a planet on the orrery, recomputed per layout call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitPlacement {
    /// Distance of the orbit ring from center, in layout units.
    pub orbit_radius: f64,
    /// Starting angle on the ring, degrees in [0, 360).
    pub start_angle: f64,
    /// Visual diameter of the planet sprite.
    pub size: f64,
    /// Seconds per full revolution.
    pub animation_duration: f64,
    /// Color token derived from the planet's climate.
    pub color: ClimateColor,
}
