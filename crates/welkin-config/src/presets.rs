//! Preset merges over the base configuration.
//!
//! A preset is a named batch of overrides applied to an already-loaded
//! config, replacing the reference pack's subpack variants. Presets compose:
//! `Lite` implies `NoWave`, `NoWaveNoFog` implies `NoWave`.

use std::str::FromStr;

use crate::config::{CloudModel, WelkinConfig};
use crate::error::ConfigError;

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Low-cost variant: no waves, no shooting star, no rain mist, no
    /// celestial reflection.
    Lite,
    /// Disable all geometry waving and rain mist.
    NoWave,
    /// `NoWave` plus fog disabled entirely.
    NoWaveNoFog,
    /// Switch to the soft cloud model.
    SimpleClouds,
    /// Switch to the blocky vanilla cloud model.
    BoxClouds,
    /// Switch to the realistic cloud model.
    RealisticClouds,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lite" => Ok(Preset::Lite),
            "no-wave" => Ok(Preset::NoWave),
            "no-wave-no-fog" => Ok(Preset::NoWaveNoFog),
            "simple-clouds" => Ok(Preset::SimpleClouds),
            "box-clouds" => Ok(Preset::BoxClouds),
            "realistic-clouds" => Ok(Preset::RealisticClouds),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl WelkinConfig {
    /// Apply a preset's overrides in place.
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Lite => {
                self.apply_preset(Preset::NoWave);
                self.celestial.shooting_star = None;
                self.reflection.celestial_reflection = false;
                self.fog.rain_mist_opacity = None;
            }
            Preset::NoWave => {
                self.waves.plants = None;
                self.waves.lanterns = None;
                self.waves.underwater = None;
                self.waves.water = false;
                self.fog.rain_mist_opacity = None;
            }
            Preset::NoWaveNoFog => {
                self.apply_preset(Preset::NoWave);
                self.fog.strength = None;
            }
            Preset::SimpleClouds => self.clouds.model = CloudModel::Soft,
            Preset::BoxClouds => self.clouds.model = CloudModel::Vanilla,
            Preset::RealisticClouds => self.clouds.model = CloudModel::Realistic,
        }
        log::info!("Applied preset {preset:?}");
    }
}
