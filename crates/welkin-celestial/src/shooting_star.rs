//! Shooting star: a thin glowing streak that fires once per cycle, then
//! rests for the configured delay.
//!
//! Each cycle hashes its index into a fresh rotation and lateral offset, so
//! successive streaks cross different parts of the sky. The generator is
//! exactly zero for the whole delay window and fades out in daylight via the
//! fog-color luminance gate.

use glam::{Vec2, Vec3};

use welkin_config::ShootingStarConfig;
use welkin_math::{cycle_rand, smoothstep};

const STAR_TINT: Vec3 = Vec3::new(0.8, 0.9, 1.0);

/// Render the shooting star contribution along `view_dir`.
///
/// `fog_color` doubles as the daylight probe: bright fog (day) suppresses
/// the streak entirely.
pub fn shooting_star(
    view_dir: Vec3,
    fog_color: Vec3,
    time: f32,
    cfg: &ShootingStarConfig,
) -> Vec3 {
    let cycle = cfg.delay + cfg.period;
    let h0 = (time / cycle).floor();
    let local = time - cycle * h0;

    // Quiet for the delay, then sweep the streak phase over the period.
    let t = ((local - cfg.delay) / cfg.period).clamp(0.0, 1.0);
    let t0 = t * t;
    let mut t1 = 1.0 - t0;
    t1 *= t1;
    t1 *= t1;
    t1 *= t1;

    // Per-cycle randomized size, rotation, and skewed motion.
    let r = cycle_rand(h0);
    let a = std::f32::consts::TAU * r;
    let (sin_a, cos_a) = a.sin_cos();
    let mut uv = Vec2::new(view_dir.x, view_dir.z) * (6.0 + 4.0 * r);
    uv = Vec2::new(cos_a * uv.x + sin_a * uv.y, -sin_a * uv.x + cos_a * uv.y);
    uv.x += t1 - t;
    uv.x -= 2.0 * r + 3.5;
    uv.y += view_dir.y * 3.0;

    let glow = 1.0 - ((uv.x - 0.95).abs() * 20.0).min(1.0);
    let mut s = 1.0 - (8.0 * uv.y).abs().min(1.0);
    s *= s * s * smoothstep(-1.0 + 1.96 * t1, 0.98 - t, uv.x);
    s *= s * s * smoothstep(1.0, 0.98 - t0, uv.x);
    s *= 1.0 - t1;
    s *= 1.0 - t0;
    s *= 0.7 + 16.0 * glow * glow;
    s *= (1.0 - fog_color.x - fog_color.y - fog_color.z).max(0.0);

    s * cfg.brightness * STAR_TINT
}
