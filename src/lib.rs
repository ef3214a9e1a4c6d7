//! # Orrery Backend
//!
//! Backend engine for the galactic planet atlas: browse Star Wars planets
//! from the SWAPI catalog, lay them out on animated orbit rings, filter and
//! fuzzy-search them, and serve AI-generated travel flavor text through a
//! thin proxy over the language-model API.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Core data types shared across modules (planets, content, layout)
//! - [`catalog`]: Paginated SWAPI catalog client and detail-resource fetches
//! - [`climate`]: Pure climate-to-color/emoji classification
//! - [`orbit`]: Orbit layout engine for the orrery view
//! - [`search`]: Fuzzy name search and climate filtering
//! - [`store`]: Key-value persistence behind an injected trait
//! - [`content`]: Cache-through AI content generation and selection sessions
//! - [`http`]: Axum-based HTTP server exposing the generation endpoint
//! - [`config`]: Environment-driven server configuration

pub mod api;

pub mod catalog;
pub mod climate;
pub mod config;
pub mod content;
pub mod orbit;
pub mod search;
pub mod store;

pub mod http;
