//! Wind-blow streak factor for the rain-mist overlay.

use glam::{Vec2, Vec3};

/// Animated wind streak factor in `[0, 1]` at a screen-projected position.
///
/// `pos` is the fragment's view-space position with `z >= 0` (in front of
/// the camera); the projection divides by `1 + z`.
pub fn wind_blow(pos: Vec3, time: f32) -> f32 {
    let p = Vec2::new(pos.x, pos.y) / (1.0 + pos.z);
    let mut val = (4.0 * p.x + 2.0 * p.y + 2.0 * time + 3.0 * p.y * p.x).sin()
        * (p.y * 2.0 + 0.2 * time).sin();
    val += (p.y - p.x + 0.2 * time).sin();
    0.25 * val * val
}
