//! Sky clock: normalized time of day, the signed day factor, and tilted
//! sun/moon paths.
//!
//! Time of day is normalized to `[0.0, 1.0)` where 0.0 is midnight, 0.25 is
//! dawn, 0.5 is noon, and 0.75 is dusk. The day factor and both celestial
//! directions vary smoothly with time.

use glam::{Mat3, Vec3};

use welkin_config::CelestialConfig;

use crate::environment::{Dimension, Environment};

/// In-game time tracking for the day/night cycle.
#[derive(Clone, Debug)]
pub struct SkyClock {
    /// Current time of day, normalized `[0.0, 1.0)`. 0.0 = midnight, 0.5 = noon.
    pub time_of_day: f64,
    /// Duration of one full day in real-time seconds.
    pub day_duration_seconds: f64,
    /// Whether the cycle is paused (e.g., in editor mode).
    pub paused: bool,
}

impl SkyClock {
    /// Create a new clock starting at noon.
    pub fn new(day_duration_seconds: f64) -> Self {
        Self {
            time_of_day: 0.5,
            day_duration_seconds,
            paused: false,
        }
    }

    /// Advance the clock by `dt` real-time seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        let day_fraction = dt / self.day_duration_seconds;
        self.time_of_day = (self.time_of_day + day_fraction) % 1.0;
    }

    /// Signed day factor in `[-1, 1]`: +1 noon, 0 at dawn/dusk, -1 midnight.
    pub fn day_factor(&self) -> f32 {
        -((self.time_of_day as f32) * std::f32::consts::TAU).cos()
    }

    /// Assemble a frame snapshot from the clock and the configured
    /// sun/moon paths.
    pub fn environment(
        &self,
        celestial: &CelestialConfig,
        dimension: Dimension,
        rain_factor: f32,
        underwater: bool,
        fog_color: Vec3,
    ) -> Environment {
        let t = self.time_of_day;
        Environment::new(
            self.day_factor(),
            rain_factor,
            dimension,
            underwater,
            sun_direction_from_time(t, celestial.sun_path_yaw, celestial.sun_path_tilt),
            moon_direction_from_time(t, celestial.moon_path_yaw, celestial.moon_path_tilt),
            fog_color,
        )
    }
}

/// Compute the sun's direction from the time of day and its configured path.
///
/// The untilted orbit runs in the XY plane with Y as "up": directly overhead
/// at noon, directly below at midnight. `tilt_degrees` tips the orbit plane,
/// `yaw_degrees` rotates its compass heading.
pub fn sun_direction_from_time(time_of_day: f64, yaw_degrees: f32, tilt_degrees: f32) -> Vec3 {
    let angle = (time_of_day as f32) * std::f32::consts::TAU;
    let base = Vec3::new(angle.sin(), -angle.cos(), 0.0);
    let tilted = Mat3::from_rotation_x(tilt_degrees.to_radians()) * base;
    (Mat3::from_rotation_y(yaw_degrees.to_radians()) * tilted).normalize()
}

/// Compute the moon's direction: half a day opposite the sun, on its own path.
pub fn moon_direction_from_time(time_of_day: f64, yaw_degrees: f32, tilt_degrees: f32) -> Vec3 {
    sun_direction_from_time((time_of_day + 0.5) % 1.0, yaw_degrees, tilt_degrees)
}
