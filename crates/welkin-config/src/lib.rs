//! Configuration system for the Welkin sky pipeline.
//!
//! The entire tuning surface — colors, exponents, speeds, and feature
//! toggles — lives in one strongly-typed [`WelkinConfig`] record constructed
//! at startup and treated as immutable for the frame's duration. Settings
//! persist to disk as RON, support preset merges (lite / no-wave / cloud
//! model variants), CLI overrides via clap, and range validation.
//!
//! Toggles whose strength is tunable (rainbow, galaxy, always-on ground
//! reflection) are modeled as `Option<f32>`: `None` compiles the effect out
//! of the frame, `Some(v)` carries its magnitude.

mod cli;
mod config;
mod error;
mod presets;
mod validate;

pub use cli::CliArgs;
pub use config::{
    BlackHoleConfig, CelestialConfig, CloudConfig, CloudModel, DebugConfig, FogConfig,
    GalaxyConfig, GradingConfig, LightingConfig, RainbowConfig, ReflectionConfig,
    ShootingStarConfig, SkyConfig, TintConfig, ToneMapCurve, WaterConfig, WaveConfig,
    WelkinConfig,
};
pub use error::ConfigError;
pub use presets::Preset;
