//! End-sky black hole: an accretion disc with a dark event horizon, plus the
//! gravitational ray bending applied to the background layers.
//!
//! The disc lives at a fixed center direction rotated by the configured
//! orientation; its distance field is perturbed by a cheap sinusoidal noise
//! and a swirling angular distortion fakes the disc's motion. The returned
//! alpha is the background transmittance: 0 inside the horizon, 1 far away.

use glam::Vec3;

use welkin_config::BlackHoleConfig;
use welkin_math::smoothstep;

// Disc center in rotation space; the orientation knob swings the whole
// assembly, so the center itself stays fixed.
const CENTER: Vec3 = Vec3::new(0.7, 0.25, 0.6);

fn rotate_xy(v: Vec3, cos_r: f32, sin_r: f32) -> Vec3 {
    Vec3::new(cos_r * v.x - sin_r * v.y, sin_r * v.x + cos_r * v.y, v.z)
}

/// Background transmittance of the event horizon at normalized distance
/// weight `dm0 = 1 - max(d0, 0)`: 0 at the core, 1 from the core radius out.
fn horizon_transmittance(dm0: f32) -> f32 {
    0.9 * dm0.powi(20) + 0.1 * dm0.powi(3)
}

/// Accretion glow envelope from the signed core-distance weight `d0`.
fn glow_envelope(d0: f32) -> f32 {
    let gl = 1.0 - (-0.2 * d0).clamp(0.0, 1.0);
    let gla = (1.0 - d0.abs().min(1.0)).powi(6);
    let gl8 = gl.powi(6);
    gla + 0.7 * gl8 + 0.2 * gl8 * gl8
}

/// Render the black hole disc along `view_dir`.
///
/// Returns `(color, transmittance)`: the disc color to add over the
/// background, and how much of that background survives underneath it.
pub fn render_black_hole(view_dir: Vec3, time: f32, cfg: &BlackHoleConfig) -> (Vec3, f32) {
    let t = time * cfg.speed;

    let (sin_r, cos_r) = cfg.orientation.sin_cos();
    let vr = rotate_xy(view_dir, cos_r, sin_r);
    let center = rotate_xy(CENTER, cos_r, sin_r);

    let vd = vr - center;

    // Cheap 3-term sinusoidal noise perturbing the distance field.
    let mut nl = (8.0 * vd.x + t).sin() * (8.0 * vd.y - t).sin() * (8.0 * vd.z + t).sin();
    nl = nl + 0.5 * ((4.0 * vd.x + t).sin() * (4.0 * vd.y - t).sin() - nl);

    let a = vd.x.atan2(vd.z);
    let d = cfg.distance_scale * (vd + Vec3::splat(0.002 * nl)).length();

    let d0 = (0.6 - d) / 0.6;
    let dm0 = 1.0 - d0.max(0.0);

    let hole = horizon_transmittance(dm0);
    let mut bh = glow_envelope(d0) * hole;

    // Swirling angular distortion faking the disc's rotation.
    let mut df = (2.0 * a - 3.0 * d + 20.0 * (1.2 - d).powi(3) + t * 0.5).sin();
    df *= 0.85 + 0.1 * (6.0 * a + d + 2.0 * t - 2.0 * df).sin();
    bh *= 1.0 + df * df * df * hole * (1.0 - bh).max(0.0);

    let color = bh
        * 3.5
        * Vec3::from(cfg.color_low).lerp(Vec3::from(cfg.color_high), smoothstep(0.0, 1.0, bh));
    (color.max(Vec3::ZERO), hole)
}

/// Bend a view direction toward the black hole, lensing the background.
///
/// `strength` scales the pull; the bend weight is capped so rays are only
/// ever pulled toward the center, never through and past it.
pub fn bend_view_dir(view_dir: Vec3, strength: f32, cfg: &BlackHoleConfig) -> Vec3 {
    let (sin_r, cos_r) = cfg.orientation.sin_cos();
    let center = rotate_xy(CENTER, cos_r, sin_r);
    let vr = rotate_xy(view_dir, cos_r, sin_r);

    let to_center = center - vr;
    let dist = to_center.length();
    let effect = smoothstep(0.6, 0.4, dist);
    let away = (vr - center).normalize_or(vr);
    let bend = (strength * effect / (dist + 0.2)).clamp(0.0, 1.0);

    let bent = vr.lerp(away, bend).normalize_or(vr);

    // Inverse rotation back to view space.
    let (inv_sin, inv_cos) = (-cfg.orientation).sin_cos();
    rotate_xy(bent, inv_cos, inv_sin)
}
