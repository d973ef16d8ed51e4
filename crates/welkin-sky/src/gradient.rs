//! Per-pixel sky gradient rendering.
//!
//! The Overworld path blends the triad vertically, carves a tight sun/moon
//! glow out of repeated squarings, and darkens the void below the horizon.
//! The End path warps the view direction into slow rotating radial bands.
//! Both paths are continuous in every input; the only discontinuity is the
//! day/night sign step, which the triad resolver already masks.

use glam::{Vec2, Vec3};

use welkin_config::SkyConfig;
use welkin_env::Environment;
use welkin_math::{mix, smoothstep, step};

use crate::triad::SkyColorTriad;

/// Render the sky color seen along `view_dir` (y up, unit length).
///
/// `is_sky_plane` marks the flat distant plane; the dome pass additionally
/// sharpens a sun/moon disc highlight that the plane must not carry.
pub fn render_sky(
    triad: &SkyColorTriad,
    env: &Environment,
    view_dir: Vec3,
    is_sky_plane: bool,
    time: f32,
    cfg: &SkyConfig,
) -> Vec3 {
    if env.is_end() {
        render_end_sky(triad, cfg, view_dir, time)
    } else {
        render_overworld_sky(triad, env, cfg, view_dir, is_sky_plane)
    }
}

fn render_overworld_sky(
    triad: &SkyColorTriad,
    env: &Environment,
    cfg: &SkyConfig,
    view_dir: Vec3,
    is_sky_plane: bool,
) -> Vec3 {
    let rain = env.rain_factor;

    // Horizon-centered mask; the 0.4 keeps the denominator away from zero.
    let mask = 0.5 + 0.5 * view_dir.y / (0.4 + view_dir.y.abs());

    // Sun/moon proximity, raised to the 8th power by repeated squaring.
    // Rain widens the falloff by pulling the base toward its square root.
    let g = Vec2::new(env.sun_dir.dot(view_dir), env.moon_dir.dot(view_dir));
    let g = (Vec2::splat(0.5) - 0.5 * g).clamp(Vec2::ZERO, Vec2::ONE);
    let g1 = Vec2::ONE
        - Vec2::new(
            mix(g.x.sqrt(), g.x, rain),
            mix(g.y.sqrt(), g.y, rain),
        );
    let g2 = g1 * g1;
    let g4 = g2 * g2;
    let g8 = g4 * g4;
    let mg8 = (g8.x + g8.y) * mask * (1.0 - 0.9 * rain);

    // Vertical basis, reshaped below the horizon and locally flattened by
    // the glow so the gradient yields to the sun/moon halo.
    let vh = 1.0 - view_dir.y * view_dir.y;
    let mut vh2 = vh * vh;
    vh2 = mix(
        vh2,
        mix(1.0, vh2 * vh2, cfg.void_factor),
        step(0.0, -view_dir.y),
    );
    vh2 = mix(vh2, 1.0, mg8);
    let vh4 = vh2 * vh2;

    let mut edge_weight = vh4 * vh4;
    let mut zenith_weight = 0.8 * edge_weight + 0.2 * vh2;
    edge_weight *= edge_weight;
    edge_weight = mix(edge_weight * edge_weight, 1.0, mg8);
    zenith_weight = mix(zenith_weight, 1.0, mg8);

    // Sun-glow-modulated horizon blending only opens inside dawn/dusk.
    let dawn = 1.0 - env.day_factor * env.day_factor;
    let df = mix(1.0, g2.x, dawn * dawn);

    let mut sky = triad
        .horizon
        .lerp(triad.horizon_edge, edge_weight * df * df);
    sky = triad.zenith.lerp(sky, zenith_weight * df);

    sky *= 0.5 + 0.5 * zenith_weight;
    sky *= (1.0 + (2.0 * mg8 + 7.0 * mg8 * mg8) * mask) * mix(1.0, mask, cfg.void_darkness);

    if !is_sky_plane {
        // Disc highlight: thresholded glow, sharpened twice, killed by rain.
        let mut source = ((mg8 - 0.22) / 0.78).max(0.0);
        source *= source;
        source *= source;
        sky *= 1.0 + 15.0 * source * (1.0 - rain);
    }

    if let Some(rainbow) = cfg.rainbow {
        let mut fade = 0.5 + 0.5 * view_dir.y;
        fade *= fade;
        fade *= mix(rainbow.clear, rainbow.rain, rain);
        fade *= 0.5 + 0.5 * env.day_factor;
        sky += spectrum(24.2 * (0.85 - g.x)) * fade * triad.horizon;
    }

    sky
}

/// Fixed-frequency rainbow spectrum of a scalar phase.
pub fn spectrum(x: f32) -> Vec3 {
    let s = Vec3::new(x - 0.5, x, x + 0.5);
    let s = Vec3::new(
        smoothstep(1.0, 0.0, s.x.abs()),
        smoothstep(1.0, 0.0, s.y.abs()),
        smoothstep(1.0, 0.0, s.z.abs()),
    );
    s * s
}

fn render_end_sky(triad: &SkyColorTriad, cfg: &SkyConfig, view_dir: Vec3, time: f32) -> Vec3 {
    let mut v = view_dir;
    v.y = smoothstep(-1.2, 1.5, v.y.abs());
    v.x += 0.004 * (10.0 * v.y - time + v.z).sin();

    let a = v.x.atan2(v.z);

    // Streak mask from nested angle/time sinusoids.
    let mut s = (a * 6.0 + 0.5 * time).sin();
    s = s * s;
    s *= 0.6 * (a * 11.0 - 0.22 * time).sin();
    let g = smoothstep(1.8 - s, -1.2, v.y);

    let f = 0.5 * g + 1.5 * smoothstep(1.2, -0.2, v.y);
    let h = 1.2 * g + 0.8 * smoothstep(1.2, -0.4, v.y);

    let streak = triad.horizon.lerp(Vec3::from(cfg.end_streak), 0.35);
    let banded = triad.horizon.lerp(streak, g);

    let mut sky = triad.zenith.lerp(banded, f * f);
    sky += banded * (g * g * g * g * 0.6 + 0.4 * h * h * h * h);
    sky
}
