//! Deterministic 3D noise normalized to `[0, 1]`, backed by the `noise`
//! crate's Simplex implementation.
//!
//! The galaxy generator samples this at three frequencies per pixel; holding
//! the permutation table in a long-lived field keeps per-sample cost to the
//! lattice lookups alone.

use glam::Vec3;
use noise::{NoiseFn, Simplex};

/// A seeded 3D noise field with output remapped to `[0, 1]`.
#[derive(Clone)]
pub struct NoiseField {
    noise: Simplex,
}

impl NoiseField {
    /// Create a field from a seed. Identical seeds sample identically.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
        }
    }

    /// Sample the field at `p`. Pure; returns a value in `[0, 1]`.
    pub fn sample(&self, p: Vec3) -> f32 {
        let raw = self.noise.get([p.x as f64, p.y as f64, p.z as f64]) as f32;
        (0.5 + 0.5 * raw).clamp(0.0, 1.0)
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(0)
    }
}
