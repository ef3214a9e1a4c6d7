//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use orrery::api::{Planet, PlanetContent, PlanetSummary};
use orrery::content::{ContentGenerator, GenerateError};

/// Build a planet with the given name and climate and placeholder fields.
pub fn planet(name: &str, climate: &str) -> Planet {
    let created = Utc.with_ymd_and_hms(2014, 12, 9, 13, 50, 49).unwrap();
    Planet {
        name: name.to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "304".to_string(),
        diameter: "10465".to_string(),
        climate: climate.to_string(),
        gravity: "1 standard".to_string(),
        terrain: "desert".to_string(),
        surface_water: "1".to_string(),
        population: "200000".to_string(),
        residents: vec![],
        films: vec![],
        created,
        edited: created,
        url: format!("https://swapi.dev/api/planets/{}/", name.to_lowercase()),
    }
}

/// Planet record in catalog wire format.
pub fn planet_json(name: &str, climate: &str) -> Value {
    json!({
        "name": name,
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": climate,
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000",
        "residents": [],
        "films": [],
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-09T13:50:49.641000Z",
        "url": format!("https://swapi.dev/api/planets/{}/", name.to_lowercase()),
    })
}

/// Serve `router` on an ephemeral local port, returning its address.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

/// Generator stub that counts invocations and optionally fails.
pub struct CountingGenerator {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingGenerator {
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The content a successful call produces for `name`.
    pub fn content_for(name: &str, call: usize) -> PlanetContent {
        PlanetContent {
            tagline: format!("{name} says hi (take {call})"),
            travel_guide: format!("All about {name}."),
            emoji: "🪐".to_string(),
        }
    }
}

#[async_trait]
impl ContentGenerator for CountingGenerator {
    async fn generate(&self, planet: &PlanetSummary) -> Result<PlanetContent, GenerateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(GenerateError::UpstreamStatus(503));
        }
        Ok(Self::content_for(&planet.name, call))
    }
}
