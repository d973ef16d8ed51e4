//! Wet-surface reflection compositing.
//!
//! Ground pixels below eye level mirror the sky: the view direction is
//! flipped across the horizon and the sky resampled for it, faded by a
//! Fresnel term, the surface's wetness, and distance. Reflections only run
//! while raining or in the End unless the always-on strength is set, and
//! they clip entirely beyond 60% of the render distance. Wet blocks darken
//! regardless of whether the mirror itself is visible.

use glam::{Vec2, Vec3, Vec4};

use welkin_celestial::SkyCompositor;
use welkin_env::{Environment, TorchLight, ViewSample};
use welkin_math::{fast_rand, fresnel_schlick, mix, smoothstep};
use welkin_sky::{SkyColorTriad, render_sky};

/// Reflectance of wet stone at normal incidence.
const BASE_REFLECTANCE: f32 = 0.03;

/// Compute the wet reflection for one ground sample and darken `color` by
/// its wetness.
///
/// Returns the reflection as RGBA: the mirrored sky color plus torch
/// ambient, with alpha as the composite weight (zero whenever the sample is
/// dry, too far, or above eye level).
pub fn apply_wet_reflection(
    color: &mut Vec3,
    triad: &SkyColorTriad,
    env: &Environment,
    view: &ViewSample,
    torch: &TorchLight,
    time: f32,
    compositor: &SkyCompositor,
) -> Vec4 {
    let cfg = compositor.config();
    let refl_cfg = &cfg.reflection;
    let mut wet = Vec4::ZERO;

    if env.rain_factor <= 0.0 && !env.is_end() && refl_cfg.always_on.is_none() {
        return wet;
    }

    let mut wetness = torch.levels.y * torch.levels.y;

    // Clip reflections when far; the alpha fade below hides the cutoff.
    let end_dist = view.render_distance * 0.6;
    if view.cam_distance < end_dist {
        let cos_r = (-view.view_dir.y).max(0.0);
        let puddles = (1.0
            - refl_cfg.rain_puddles
                * fast_rand(Vec2::new(view.tiled_chunk_pos.x, view.tiled_chunk_pos.z)))
        .max(0.0);

        let reflective = match refl_cfg.always_on {
            Some(base) => {
                let mut reflective = base;
                if !env.is_end() && !env.is_nether() {
                    reflective *= wetness;
                }
                wetness *= puddles;
                mix(reflective, wetness, env.rain_factor)
            }
            None => {
                wetness *= puddles;
                if env.is_end() {
                    // The End keeps a strong reflection, biased by height.
                    (wetness * (0.6 + 0.5 * smoothstep(-2.0, 0.5, view.world_pos.y))).max(0.5)
                        * 2.0
                } else {
                    wetness * env.rain_factor * refl_cfg.rain_wetness
                }
            }
        };

        if view.world_pos.y < 0.0 {
            let mirrored = Vec3::new(view.view_dir.x, -view.view_dir.y, view.view_dir.z);
            let sky = if refl_cfg.celestial_reflection {
                compositor.render(triad, env, mirrored, false, time)
            } else {
                render_sky(triad, env, mirrored, false, time, &cfg.sky)
            };
            let rgb = sky + torch.color * torch.levels.x * cfg.lighting.torchlight_intensity;

            let mut alpha = fresnel_schlick(cos_r, BASE_REFLECTANCE) * reflective;
            alpha *= (2.0 - 2.0 * view.cam_distance / end_dist).clamp(0.0, 1.0);
            wet = rgb.extend(alpha.clamp(0.0, 1.0));
        }
    }

    // Darken wet parts whether or not the mirror shows.
    *color *= 1.0 - 0.4 * wetness * env.rain_factor;

    wet
}
