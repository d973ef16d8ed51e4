//! Cheap deterministic hashes for per-sample and per-cycle randomness.
//!
//! These are the multiply-sine hashes common in fragment shading: fast,
//! stateless, well-distributed enough for puddle masks and cycle seeds.
//! They are not a bit-exact contract; a substitute with similar distribution
//! is acceptable if golden images are regenerated.

use glam::Vec2;

/// Fractional part of `x`, always in `[0, 1)` for finite input.
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Hash a 2D position to `[0, 1)`.
///
/// Used for the per-chunk puddle mask in the ground reflection pass.
pub fn fast_rand(p: Vec2) -> f32 {
    fract((p.dot(Vec2::new(12.9898, 78.233))).sin() * 43758.5453)
}

/// Hash a cycle index to `[0, 1)`.
///
/// Seeds the per-cycle rotation and offset of the shooting star; the input
/// is a small integer-valued float (a `floor` of time over the cycle length),
/// which keeps the sine argument well inside f32 precision.
pub fn cycle_rand(cycle: f32) -> f32 {
    fract(cycle.sin() * 43758.545313)
}
