//! Range validation for the tuning surface.
//!
//! Every numeric knob has a documented window (the comment ranges in
//! `config.rs`); validation rejects values outside it so a typo in the RON
//! file surfaces at load time instead of as a silently broken sky.

use crate::config::WelkinConfig;
use crate::error::ConfigError;

fn check(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_color(field: &'static str, color: [f32; 3]) -> Result<(), ConfigError> {
    for &channel in &color {
        if !channel.is_finite() || channel < 0.0 {
            return Err(ConfigError::NegativeColor {
                field,
                value: channel,
            });
        }
    }
    Ok(())
}

impl WelkinConfig {
    /// Validate every knob against its documented range.
    ///
    /// Returns the first violation found; the config is not modified.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("grading.gamma", self.grading.gamma, 0.5, 3.0)?;
        check("grading.exposure", self.grading.exposure, 0.1, 5.0)?;
        check("grading.saturation", self.grading.saturation, 0.0, 2.0)?;
        if let Some(tint) = self.grading.tint {
            check_color("grading.tint.low", tint.low)?;
            check_color("grading.tint.high", tint.high)?;
        }

        check(
            "lighting.sunlight_intensity",
            self.lighting.sunlight_intensity,
            0.5,
            5.0,
        )?;
        check(
            "lighting.torchlight_intensity",
            self.lighting.torchlight_intensity,
            0.0,
            3.0,
        )?;
        check(
            "lighting.shadow_intensity",
            self.lighting.shadow_intensity,
            0.0,
            1.0,
        )?;

        check("sky.void_factor", self.sky.void_factor, 0.0, 1.0)?;
        check("sky.void_darkness", self.sky.void_darkness, 0.0, 1.0)?;
        check("sky.rain_mix_factor", self.sky.rain_mix_factor, 0.0, 1.0)?;
        check(
            "sky.underwater_brightness",
            self.sky.underwater_brightness,
            0.0,
            3.0,
        )?;
        for (field, color) in [
            ("sky.dawn_zenith", self.sky.dawn_zenith),
            ("sky.dawn_horizon", self.sky.dawn_horizon),
            ("sky.dawn_edge", self.sky.dawn_edge),
            ("sky.day_zenith", self.sky.day_zenith),
            ("sky.day_horizon", self.sky.day_horizon),
            ("sky.day_edge", self.sky.day_edge),
            ("sky.night_zenith", self.sky.night_zenith),
            ("sky.night_horizon", self.sky.night_horizon),
            ("sky.night_edge", self.sky.night_edge),
            ("sky.rain_zenith", self.sky.rain_zenith),
            ("sky.rain_horizon", self.sky.rain_horizon),
            ("sky.end_zenith", self.sky.end_zenith),
            ("sky.end_horizon", self.sky.end_horizon),
            ("sky.end_streak", self.sky.end_streak),
            ("sky.underwater_tint", self.sky.underwater_tint),
        ] {
            check_color(field, color)?;
        }
        if let Some(rainbow) = self.sky.rainbow {
            check("sky.rainbow.clear", rainbow.clear, 0.0, 2.0)?;
            check("sky.rainbow.rain", rainbow.rain, 0.0, 2.0)?;
        }

        check("celestial.sun_size", self.celestial.sun_size, 0.3, 4.0)?;
        check("celestial.moon_size", self.celestial.moon_size, 0.3, 4.0)?;
        check(
            "celestial.rain_visibility",
            self.celestial.rain_visibility,
            0.0,
            1.0,
        )?;
        if let Some(star) = self.celestial.shooting_star {
            check("celestial.shooting_star.brightness", star.brightness, 0.0, 1.0)?;
            check("celestial.shooting_star.period", star.period, 0.4, 12.0)?;
            check("celestial.shooting_star.delay", star.delay, 0.0, 100.0)?;
        }
        let galaxy = &self.celestial.galaxy;
        if let Some(brightness) = galaxy.overworld {
            check("celestial.galaxy.overworld", brightness, 0.1, 4.0)?;
        }
        if let Some(brightness) = galaxy.end {
            check("celestial.galaxy.end", brightness, 0.1, 4.0)?;
        }
        check("celestial.galaxy.vibrance", galaxy.vibrance, 0.0, 1.0)?;
        check("celestial.galaxy.speed", galaxy.speed, 0.0, 0.2)?;
        check(
            "celestial.galaxy.day_visibility",
            galaxy.day_visibility,
            0.0,
            1.0,
        )?;
        if let Some(hole) = self.celestial.black_hole {
            check_color("celestial.black_hole.color_low", hole.color_low)?;
            check_color("celestial.black_hole.color_high", hole.color_high)?;
            check(
                "celestial.black_hole.orientation",
                hole.orientation,
                0.0,
                std::f32::consts::PI,
            )?;
            check(
                "celestial.black_hole.distance_scale",
                hole.distance_scale,
                1.0,
                4.0,
            )?;
            check("celestial.black_hole.speed", hole.speed, 0.0, 2.0)?;
        }

        if let Some(strength) = self.fog.strength {
            check("fog.strength", strength, 0.1, 1.0)?;
        }
        check("fog.mist_density", self.fog.mist_density, 0.0, 1.0)?;
        if let Some(opacity) = self.fog.rain_mist_opacity {
            check("fog.rain_mist_opacity", opacity, 0.04, 0.5)?;
        }

        check("clouds.thickness", self.clouds.thickness, 0.5, 8.0)?;
        check("clouds.rain_thickness", self.clouds.rain_thickness, 0.5, 8.0)?;
        check("clouds.opacity", self.clouds.opacity, 0.0, 1.0)?;
        check("clouds.scale", self.clouds.scale, 0.003, 0.3)?;
        check("clouds.velocity", self.clouds.velocity, 0.0, 4.0)?;

        check("water.transparency", self.water.transparency, 0.0, 1.0)?;
        check("water.bump", self.water.bump, 0.001, 0.2)?;
        check("water.wave_speed", self.water.wave_speed, 0.2, 2.0)?;
        check_color("water.tint", self.water.tint)?;

        if let Some(amount) = self.waves.plants {
            check("waves.plants", amount, 0.02, 0.4)?;
        }
        if let Some(amount) = self.waves.lanterns {
            check("waves.lanterns", amount, 0.05, 0.4)?;
        }
        if let Some(amount) = self.waves.underwater {
            check("waves.underwater", amount, 0.02, 0.6)?;
        }
        check("waves.speed", self.waves.speed, 0.5, 5.0)?;
        check("waves.range", self.waves.range, 6.0, 32.0)?;

        if let Some(strength) = self.reflection.always_on {
            check("reflection.always_on", strength, 0.2, 1.0)?;
        }
        check(
            "reflection.rain_wetness",
            self.reflection.rain_wetness,
            0.0,
            1.0,
        )?;
        check(
            "reflection.rain_puddles",
            self.reflection.rain_puddles,
            0.0,
            1.0,
        )?;

        Ok(())
    }
}
