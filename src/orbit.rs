//! Orbit layout engine for the orrery view.
//!
//! Assigns each planet a pseudo-random but visually plausible ring, starting
//! angle, sprite size, and revolution speed. Layouts are intentionally fresh
//! on every call; the RNG is an injected parameter so tests can seed it
//! (ChaCha) while production uses thread-local entropy. Callers memoize a
//! layout if they need stability across renders.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::api::{OrbitPlacement, Planet};
use crate::climate;

/// Base orbit rings, in layout units from center.
pub const BASE_ORBIT_RINGS: [f64; 6] = [120.0, 180.0, 240.0, 300.0, 360.0, 420.0];

/// Uniform jitter applied to a ring radius, in layout units either way.
pub const RADIUS_JITTER: f64 = 20.0;

/// Smallest and largest sprite sizes.
pub const SIZE_RANGE: (f64, f64) = (40.0, 60.0);

/// Compute one placement per planet using the given random source.
///
/// Rings are assigned round-robin by planet index and the assignment order
/// shuffled for better visual distribution. Revolution duration grows with
/// radius (closer rings spin faster), with a small random wobble.
pub fn layout<R: Rng + ?Sized>(planets: &[Planet], rng: &mut R) -> Vec<OrbitPlacement> {
    if planets.is_empty() {
        return Vec::new();
    }

    let mut rings: Vec<f64> = (0..planets.len())
        .map(|i| BASE_ORBIT_RINGS[i % BASE_ORBIT_RINGS.len()])
        .collect();
    rings.shuffle(rng);

    planets
        .iter()
        .zip(rings)
        .map(|(planet, base_ring)| {
            let orbit_radius = base_ring + rng.gen_range(-RADIUS_JITTER..RADIUS_JITTER);
            let start_angle = rng.gen_range(0.0..360.0);
            let size = rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1);

            let base_speed = 20.0 + orbit_radius / 20.0;
            let animation_duration = base_speed + rng.gen_range(-2.5..2.5);

            OrbitPlacement {
                orbit_radius,
                start_angle,
                size,
                animation_duration,
                color: climate::color_for(&planet.climate),
            }
        })
        .collect()
}

/// Production layout using thread-local entropy.
pub fn layout_entropy(planets: &[Planet]) -> Vec<OrbitPlacement> {
    layout(planets, &mut rand::thread_rng())
}
