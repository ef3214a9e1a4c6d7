//! HTTP server module.
//!
//! Exposes the content-generation proxy as a REST endpoint so the upstream
//! API key never reaches a client. The layering mirrors the rest of the
//! crate: handlers parse and validate, the generator trait does the work,
//! and errors map onto `{error}` JSON bodies.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
