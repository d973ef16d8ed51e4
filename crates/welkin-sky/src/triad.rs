//! Per-frame resolution of the three-color sky gradient.

use glam::Vec3;

use welkin_config::SkyConfig;
use welkin_env::Environment;
use welkin_math::{mix, step};

/// The three-color description of a sky gradient at an instant: zenith on
/// top, horizon at eye level, horizon edge hugging the skyline.
///
/// Resolved once per frame from the environment snapshot; colors are linear
/// RGB with HDR headroom and never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyColorTriad {
    /// Color straight up.
    pub zenith: Vec3,
    /// Color at eye level.
    pub horizon: Vec3,
    /// Color of the thin band hugging the skyline.
    pub horizon_edge: Vec3,
}

impl SkyColorTriad {
    /// Resolve the triad for the current frame.
    ///
    /// The End sky is static; everywhere else the triad layers day/night,
    /// dawn, rain, and underwater adjustments in that order — the overrides
    /// stack rather than exclude each other.
    pub fn resolve(env: &Environment, sky: &SkyConfig) -> Self {
        if env.is_end() {
            return Self::end_colors(sky);
        }
        Self::overworld_colors(env, sky)
    }

    fn end_colors(sky: &SkyConfig) -> Self {
        let horizon = Vec3::from(sky.end_horizon);
        Self {
            zenith: Vec3::from(sky.end_zenith),
            horizon,
            horizon_edge: horizon,
        }
    }

    fn overworld_colors(env: &Environment, sky: &SkyConfig) -> Self {
        // Night colors are amplified toward twilight so the narrow window
        // around dayFactor = 0 stays readable rather than crushing to black.
        let f = 1.0 + 2.0 * (1.0 - (-env.day_factor).max(0.0));
        let night = step(0.0, -env.day_factor);

        let mut zenith = Vec3::from(sky.day_zenith).lerp(Vec3::from(sky.night_zenith) * f, night);
        let mut horizon = Vec3::from(sky.day_horizon).lerp(Vec3::from(sky.night_horizon) * f, night);
        let mut edge = Vec3::from(sky.day_edge).lerp(Vec3::from(sky.night_edge) * f, night);

        // Narrow dawn/dusk window; the extra self-square on the night side
        // masks the day/night step at dayFactor = 0.
        let mut dawn = 1.0 - env.day_factor * env.day_factor;
        dawn *= dawn * dawn;
        dawn *= mix(1.0, dawn * dawn, night);
        zenith = zenith.lerp(Vec3::from(sky.dawn_zenith), dawn);
        horizon = horizon.lerp(Vec3::from(sky.dawn_horizon), dawn);
        edge = edge.lerp(Vec3::from(sky.dawn_edge), dawn);

        // Rain desaturates toward a gray scaled by the scene's own luminance,
        // preserving brightness while killing hue.
        let zenith_lum = zenith.dot(Vec3::splat(0.33));
        let horizon_lum = horizon.dot(Vec3::splat(0.33));
        let rain_mix = env.rain_factor * sky.rain_mix_factor;
        zenith = zenith.lerp(Vec3::from(sky.rain_zenith) * zenith_lum, rain_mix);
        horizon = horizon.lerp(Vec3::from(sky.rain_horizon) * horizon_lum, rain_mix);
        edge = edge.lerp(horizon, env.rain_factor);

        if env.underwater {
            let tint = env.fog_color * env.fog_color * Vec3::from(sky.underwater_tint);
            zenith = (2.0 * tint).lerp(tint * zenith_lum, 0.8);
            horizon = (2.0 * tint).lerp(tint * horizon_lum, 0.8);
            edge = horizon;
        }

        Self {
            zenith,
            horizon,
            horizon_edge: edge,
        }
    }
}
