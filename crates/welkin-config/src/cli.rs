//! Command-line overrides for the sky pipeline configuration.

use std::path::PathBuf;

use clap::Args;

use crate::config::WelkinConfig;
use crate::error::ConfigError;
use crate::presets::Preset;

/// Configuration-level command-line arguments.
///
/// Reusable from any binary's parser via `#[command(flatten)]`; CLI values
/// override settings loaded from `welkin.ron`.
#[derive(Args, Debug, Default)]
pub struct CliArgs {
    /// Path to the config directory (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Apply a named preset after loading (lite, no-wave, no-wave-no-fog,
    /// simple-clouds, box-clouds, realistic-clouds).
    #[arg(long)]
    pub preset: Option<String>,

    /// Exposure override.
    #[arg(long)]
    pub exposure: Option<f32>,

    /// Gamma override.
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Saturation override.
    #[arg(long)]
    pub saturation: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl WelkinConfig {
    /// Apply CLI overrides to a loaded config.
    ///
    /// The preset (if any) is applied first so explicit flags win over it.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(ref name) = args.preset {
            let preset: Preset = name.parse()?;
            self.apply_preset(preset);
        }
        if let Some(exposure) = args.exposure {
            self.grading.exposure = exposure;
        }
        if let Some(gamma) = args.gamma {
            self.grading.gamma = gamma;
        }
        if let Some(saturation) = args.saturation {
            self.grading.saturation = saturation;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        Ok(())
    }
}
