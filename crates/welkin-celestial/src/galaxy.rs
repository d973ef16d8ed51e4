//! Galaxy field: a slowly rotating band of stars and glow built from three
//! domain-warped noise octaves.
//!
//! The octaves sample at frequencies 15/50/200, each layer warped by the one
//! before it; a low-frequency sine field stands in for the broad galactic
//! glow. The End variant recolors everything toward the streak accent.

use glam::{Vec2, Vec3};

use welkin_config::GalaxyConfig;
use welkin_env::Environment;
use welkin_math::{mix, smoothstep, NoiseField};

/// Star/glow generator over the sky sphere.
///
/// Holds the noise permutation table so per-pixel sampling stays cheap;
/// everything else is pure function of the inputs.
pub struct GalaxyField {
    noise: NoiseField,
    cfg: GalaxyConfig,
    end_streak: Vec3,
}

impl GalaxyField {
    /// Build a field from its config and the End streak accent color.
    pub fn new(cfg: GalaxyConfig, end_streak: Vec3) -> Self {
        Self {
            noise: NoiseField::new(cfg.seed),
            cfg,
            end_streak,
        }
    }

    /// Sample the field along `view_dir`.
    ///
    /// Returns the unscaled layer color; the compositor applies the
    /// per-dimension brightness toggle. Underwater the field is the zero
    /// vector unless the config keeps it visible.
    pub fn sample(&self, view_dir: Vec3, env: &Environment, time: f32) -> Vec3 {
        if env.underwater && !self.cfg.show_underwater {
            return Vec3::ZERO;
        }

        let t = time * self.cfg.speed;

        // Slow rotation of the whole field.
        let cos_b = (0.2 * t).sin();
        let sin_b = (0.2 * t).cos();
        let mut v = view_dir;
        let rotated = Vec2::new(cos_b * v.x + sin_b * v.y, -sin_b * v.x + cos_b * v.y);
        v.x = rotated.x;
        v.y = rotated.y;

        // Broad glow field plus three domain-warped octaves.
        let n0 = 0.5 + 0.5 * (5.0 * v.x).sin() * (5.0 * v.y - 0.5 * t).sin() * (5.0 * v.z + 0.5 * t).sin();
        let n1 = self.noise.sample(15.0 * v + Vec3::splat((0.85 * t + 1.3).sin()));
        let n2 = self
            .noise
            .sample(50.0 * v + Vec3::splat(n1) + Vec3::splat((0.7 * t + 1.0).sin()));
        let n3 = self
            .noise
            .sample(200.0 * v - Vec3::splat(10.0 * (0.4 * t + 0.5).sin()));

        // Star mask.
        let n3 = smoothstep(0.04, 0.3, n3 + 0.02 * n2);
        let gd = v.x + 0.1 * v.y + 0.1 * (10.0 * v.z + 0.2 * t).sin();
        let st = n1 * n2 * n3 * n3 * (1.0 + 70.0 * gd * gd);
        let st = ((1.0 - st) / (1.0 + 400.0 * st)).max(0.0);

        if env.is_end() {
            let gf = 1.0 - (v.x * v.x + 0.03 * n1 + 0.2 * n0);
            let stars = Vec3::new(1.2, 1.0, 0.8).lerp(self.end_streak * 3.5, gf);
            return Vec3::splat(st) + st * gf * 2.2 * stars;
        }

        let mut stars = Vec3::new(
            0.8 + 0.2 * (8.0 * (2.0 * n1 + 0.8 * n2)).sin(),
            0.8 + 0.2 * (6.0 * (2.0 * n1 + 0.8 * n2) + 0.4).sin(),
            0.8 + 0.2 * (10.0 * (2.0 * n1 + 0.8 * n2) + 0.82).sin(),
        ) * st;

        // Galactic glow band.
        let gf_mask = v.x.abs() - 0.15 * n1 + 0.04 * n2 + 0.25 * n0;
        let mut gf = 1.0 - (v.x * v.x + 0.03 * n1 + 0.2 * n0);
        gf *= gf;
        gf *= gf * gf;
        gf *= 1.0 - 0.3 * smoothstep(0.2, 0.3, gf_mask);
        gf *= 1.0 - 0.2 * smoothstep(0.3, 0.4, gf_mask);
        gf *= 1.0 - 0.1 * smoothstep(0.2, 0.1, gf_mask);
        let gf_col = Vec3::new(n0, (2.0 * v.y).cos(), (v.x + n0).sin()).normalize_or(Vec3::ONE);
        stars += (0.4 * gf + 0.012)
            * Vec3::splat(0.5).lerp(gf_col * gf_col, self.cfg.vibrance);

        // Daylight fade, probed from the fog color.
        let daylight = env.fog_color.dot(Vec3::new(0.5, 0.7, 0.5)).min(1.0);
        stars *= mix(1.0, self.cfg.day_visibility, daylight);

        stars * (1.0 - env.rain_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use welkin_env::Dimension;

    fn field() -> GalaxyField {
        GalaxyField::new(GalaxyConfig::default(), Vec3::new(0.32, 0.2, 0.74))
    }

    fn night_env(dimension: Dimension, underwater: bool, rain: f32) -> Environment {
        Environment::new(
            -0.8,
            rain,
            dimension,
            underwater,
            Vec3::Y,
            -Vec3::Y,
            Vec3::splat(0.02),
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
    fn test_underwater_is_zero_vector() {
        let field = field();
        let env = night_env(Dimension::Overworld, true, 0.0);
        for dir in sphere_dirs(300) {
            for time in [0.0, 3.7, 4000.0] {
                assert_eq!(
                    field.sample(dir, &env, time),
                    Vec3::ZERO,
                    "Underwater galaxy must vanish (flag off)"
                );
            }
        }
    }

    #[test]
    fn test_underwater_flag_keeps_field_visible() {
        let cfg = GalaxyConfig {
            show_underwater: true,
            ..Default::default()
        };
        let field = GalaxyField::new(cfg, Vec3::new(0.32, 0.2, 0.74));
        let env = night_env(Dimension::Overworld, true, 0.0);
        let total: f32 = sphere_dirs(300)
            .into_iter()
            .map(|d| field.sample(d, &env, 1.0).length())
            .sum();
        assert!(total > 0.0, "Override flag should keep the field visible");
    }

    #[test]
    fn test_deterministic() {
        let field = field();
        let env = night_env(Dimension::Overworld, false, 0.0);
        let dir = Vec3::new(0.2, 0.6, -0.77).normalize();
        let a = field.sample(dir, &env, 123.456);
        let b = field.sample(dir, &env, 123.456);
        assert_eq!(a, b, "Identical inputs must sample bit-identically");
    }

    #[test]
    fn test_full_rain_blanks_overworld_field() {
        let field = field();
        let env = night_env(Dimension::Overworld, false, 1.0);
        for dir in sphere_dirs(100) {
            let out = field.sample(dir, &env, 2.0);
            assert!(
                out.length() < 1e-6,
                "Full storm should hide the stars, got {out}"
            );
        }
    }

    #[test]
    fn test_daytime_fades_field_with_default_visibility() {
        let field = field();
        // Bright day fog saturates the daylight probe.
        let env = Environment::new(
            0.9,
            0.0,
            Dimension::Overworld,
            false,
            Vec3::Y,
            -Vec3::Y,
            Vec3::new(0.7, 0.8, 0.9),
        );
        for dir in sphere_dirs(100) {
            let out = field.sample(dir, &env, 2.0);
            assert!(
                out.length() < 1e-5,
                "day_visibility = 0 should erase the field in daylight, got {out}"
            );
        }
    }

    #[test]
    fn test_night_field_is_lit_and_finite() {
        let field = field();
        let env = night_env(Dimension::Overworld, false, 0.0);
        let mut total = 0.0;
        for dir in sphere_dirs(500) {
            let out = field.sample(dir, &env, 7.0);
            assert!(out.is_finite(), "Non-finite galaxy sample {out} at {dir}");
            assert!(
                out.min_element() >= -1e-6,
                "Galaxy sample dipped negative: {out} at {dir}"
            );
            total += out.length();
        }
        assert!(total > 1.0, "Night sky should carry visible structure");
    }

    #[test]
    fn test_end_variant_leans_toward_streak_accent() {
        let field = field();
        let env = night_env(Dimension::End, false, 0.0);
        let mut accumulated = Vec3::ZERO;
        for dir in sphere_dirs(500) {
            accumulated += field.sample(dir, &env, 3.0);
        }
        // The streak accent is violet: blue over green on average.
        assert!(
            accumulated.z > accumulated.y,
            "End galaxy should lean violet, got {accumulated}"
        );
    }

    #[test]
    fn test_field_rotates_over_time() {
        let field = field();
        let env = night_env(Dimension::Overworld, false, 0.0);
        let dir = Vec3::new(0.3, 0.7, 0.65).normalize();
        let early = field.sample(dir, &env, 0.0);
        let later = field.sample(dir, &env, 50.0);
        assert!(
            (early - later).length() > 1e-5,
            "The field should drift with time"
        );
    }
}
