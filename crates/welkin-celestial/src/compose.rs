//! Fixed-order composition of the sky and its celestial accents.
//!
//! Layer order is load-bearing: the base sky samples the blackhole-bent
//! direction, the disc is drawn over that distorted background, then the
//! galaxy and the shooting star go on top, each through its own mask.

use glam::Vec3;

use welkin_config::WelkinConfig;
use welkin_env::{Dimension, Environment};
use welkin_sky::{SkyColorTriad, render_sky};

use crate::black_hole::{bend_view_dir, render_black_hole};
use crate::galaxy::GalaxyField;
use crate::shooting_star::shooting_star;

/// Lensing strength fed to the ray bend for background layers.
const BEND_STRENGTH: f32 = 1.0;

/// Renders the full sky: gradient plus celestial accents, per sample.
///
/// Construct once per config; `render` is then pure per `(triad, env,
/// view_dir, time)` and safe to call from any number of samples in parallel.
pub struct SkyCompositor {
    config: WelkinConfig,
    galaxy: GalaxyField,
}

impl SkyCompositor {
    /// Build a compositor, deriving the galaxy field from the config.
    pub fn new(config: WelkinConfig) -> Self {
        let galaxy = GalaxyField::new(
            config.celestial.galaxy.clone(),
            Vec3::from(config.sky.end_streak),
        );
        log::debug!(
            "Sky compositor ready: galaxy seed {}, black hole {}",
            config.celestial.galaxy.seed,
            if config.celestial.black_hole.is_some() {
                "on"
            } else {
                "off"
            }
        );
        Self { config, galaxy }
    }

    /// The configuration this compositor renders with.
    pub fn config(&self) -> &WelkinConfig {
        &self.config
    }

    /// Resolve the frame's color triad.
    pub fn resolve_triad(&self, env: &Environment) -> SkyColorTriad {
        SkyColorTriad::resolve(env, &self.config.sky)
    }

    /// Render the composited sky color along `view_dir`.
    pub fn render(
        &self,
        triad: &SkyColorTriad,
        env: &Environment,
        view_dir: Vec3,
        is_sky_plane: bool,
        time: f32,
    ) -> Vec3 {
        let celestial = &self.config.celestial;

        // The background layers sample through the lens.
        let background_dir = match celestial.black_hole {
            Some(bh) if env.is_end() => bend_view_dir(view_dir, BEND_STRENGTH, &bh),
            _ => view_dir,
        };

        let mut color = render_sky(
            triad,
            env,
            background_dir,
            is_sky_plane,
            time,
            &self.config.sky,
        );

        if env.is_end()
            && let Some(bh) = celestial.black_hole
        {
            let (disc, transmittance) = render_black_hole(view_dir, time, &bh);
            color = color * transmittance + disc;
        }

        let galaxy_brightness = match env.dimension {
            Dimension::End => celestial.galaxy.end,
            Dimension::Overworld => celestial.galaxy.overworld,
            Dimension::Nether => None,
        };
        if let Some(brightness) = galaxy_brightness {
            color += self.galaxy.sample(background_dir, env, time) * brightness;
        }

        if env.dimension == Dimension::Overworld
            && let Some(star) = celestial.shooting_star
        {
            color += shooting_star(view_dir, env.fog_color, time, &star);
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overworld_night() -> Environment {
        Environment::new(
            -0.8,
            0.0,
            Dimension::Overworld,
            false,
            Vec3::new(0.0, -0.9, 0.4).normalize(),
            Vec3::new(0.0, 0.9, -0.4).normalize(),
            Vec3::splat(0.02),
        )
    }

    fn end_env() -> Environment {
        Environment::new(
            0.0,
            0.0,
            Dimension::End,
            false,
            Vec3::Y,
            -Vec3::Y,
            Vec3::splat(0.1),
        )
    }

    fn sphere_dirs(count: usize) -> Vec<Vec3> {
        let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
        (0..count)
            .map(|i| {
                let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
                let r = (1.0 - y * y).max(0.0).sqrt();
                let a = golden * i as f32;
                Vec3::new(r * a.cos(), y, r * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_composited_sky_finite_and_non_negative() {
        let compositor = SkyCompositor::new(WelkinConfig::default());
        for env in [overworld_night(), end_env()] {
            let triad = compositor.resolve_triad(&env);
            for dir in sphere_dirs(400) {
                for time in [0.0, 8.0, 123_456.0] {
                    let color = compositor.render(&triad, &env, dir, false, time);
                    assert!(
                        color.is_finite() && color.min_element() >= 0.0,
                        "Bad composited color {color} at {dir} t={time}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_accents_reduces_to_base_sky() {
        let mut config = WelkinConfig::default();
        config.celestial.shooting_star = None;
        config.celestial.black_hole = None;
        config.celestial.galaxy.overworld = None;
        config.celestial.galaxy.end = None;
        let compositor = SkyCompositor::new(config.clone());

        let env = overworld_night();
        let triad = compositor.resolve_triad(&env);
        for dir in sphere_dirs(50) {
            let composed = compositor.render(&triad, &env, dir, false, 8.0);
            let base = render_sky(&triad, &env, dir, false, 8.0, &config.sky);
            assert_eq!(
                composed, base,
                "With every accent off, composition must be the bare gradient"
            );
        }
    }

    #[test]
    fn test_event_horizon_occludes_the_background() {
        // Inside the horizon the composed color must be nearly insensitive
        // to the background triad; in the open sky it must track it.
        let mut config = WelkinConfig::default();
        config.celestial.galaxy.end = None;
        let compositor = SkyCompositor::new(config);
        let bh = compositor.config().celestial.black_hole.unwrap();
        let env = end_env();

        let triad_a = compositor.resolve_triad(&env);
        let triad_b = SkyColorTriad {
            zenith: triad_a.zenith + Vec3::splat(0.5),
            horizon: triad_a.horizon + Vec3::splat(0.5),
            horizon_edge: triad_a.horizon_edge + Vec3::splat(0.5),
        };

        let occluded_dir = sphere_dirs(4000)
            .into_iter()
            .min_by(|a, b| {
                render_black_hole(*a, 0.0, &bh)
                    .1
                    .total_cmp(&render_black_hole(*b, 0.0, &bh).1)
            })
            .unwrap();
        let (_, transmittance) = render_black_hole(occluded_dir, 0.0, &bh);
        assert!(
            transmittance < 0.1,
            "Sweep failed to land inside the horizon (transmittance {transmittance})"
        );
        let open_dir = -occluded_dir;

        let horizon_leak = (compositor.render(&triad_a, &env, occluded_dir, false, 0.0)
            - compositor.render(&triad_b, &env, occluded_dir, false, 0.0))
        .length();
        let open_shift = (compositor.render(&triad_a, &env, open_dir, false, 0.0)
            - compositor.render(&triad_b, &env, open_dir, false, 0.0))
        .length();
        assert!(
            horizon_leak < open_shift * 0.25,
            "Background should barely leak through the horizon: leak={horizon_leak} open={open_shift}"
        );
    }

    #[test]
    fn test_shooting_star_layer_contributes() {
        let mut config = WelkinConfig::default();
        config.celestial.galaxy.overworld = None;
        let with_star = SkyCompositor::new(config.clone());
        config.celestial.shooting_star = None;
        let without_star = SkyCompositor::new(config);

        let env = overworld_night();
        let triad = with_star.resolve_triad(&env);
        let t = 8.0; // inside the first visible period (delay 6, period 4)
        let gained: f32 = sphere_dirs(4000)
            .into_iter()
            .map(|d| {
                (with_star.render(&triad, &env, d, false, t)
                    - without_star.render(&triad, &env, d, false, t))
                .length()
            })
            .sum();
        assert!(
            gained > 1e-3,
            "The streak layer should add light somewhere, gained {gained}"
        );
    }

    #[test]
    fn test_galaxy_layer_contributes_in_end() {
        let config = WelkinConfig::default();
        let with_galaxy = SkyCompositor::new(config.clone());
        let mut config_off = config;
        config_off.celestial.galaxy.end = None;
        let without_galaxy = SkyCompositor::new(config_off);

        let env = end_env();
        let triad = with_galaxy.resolve_triad(&env);
        let gained: f32 = sphere_dirs(200)
            .into_iter()
            .map(|d| {
                (with_galaxy.render(&triad, &env, d, false, 3.0)
                    - without_galaxy.render(&triad, &env, d, false, 3.0))
                .length()
            })
            .sum();
        assert!(
            gained > 0.1,
            "The End galaxy layer should add light, gained {gained}"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let compositor = SkyCompositor::new(WelkinConfig::default());
        let env = end_env();
        let triad = compositor.resolve_triad(&env);
        let dir = Vec3::new(0.5, 0.2, 0.84).normalize();
        assert_eq!(
            compositor.render(&triad, &env, dir, false, 42.0),
            compositor.render(&triad, &env, dir, false, 42.0)
        );
    }

    #[test]
    fn test_nether_gets_no_accents() {
        let compositor = SkyCompositor::new(WelkinConfig::default());
        let env = Environment::new(
            0.0,
            0.0,
            Dimension::Nether,
            false,
            Vec3::Y,
            -Vec3::Y,
            Vec3::new(0.3, 0.1, 0.1),
        );
        let triad = compositor.resolve_triad(&env);
        for dir in sphere_dirs(50) {
            let composed = compositor.render(&triad, &env, dir, false, 8.0);
            let base = render_sky(&triad, &env, dir, false, 8.0, &compositor.config().sky);
            assert_eq!(composed, base, "Nether sky carries no celestial accents");
        }
    }
}
