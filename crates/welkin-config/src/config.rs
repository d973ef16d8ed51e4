//! Configuration structs with tuned defaults and RON persistence.
//!
//! Color fields are linear RGB triples; ranges given in the field docs are
//! the artistically sane windows checked by [`WelkinConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the sky pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WelkinConfig {
    /// Output color grading.
    pub grading: GradingConfig,
    /// Terrain and torch lighting colors consumed by the frame compositor.
    pub lighting: LightingConfig,
    /// Sky gradient palette and shaping factors.
    pub sky: SkyConfig,
    /// Shooting star, galaxy, and black hole settings.
    pub celestial: CelestialConfig,
    /// Fog and mist settings consumed by the fog collaborator.
    pub fog: FogConfig,
    /// Cloud model selection consumed by the cloud collaborator.
    pub clouds: CloudConfig,
    /// Water surface settings consumed by the water collaborator.
    pub water: WaterConfig,
    /// Geometry wave settings consumed by the vertex collaborator.
    pub waves: WaveConfig,
    /// Wet ground reflection settings.
    pub reflection: ReflectionConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tone mapping curve applied before gamma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneMapCurve {
    /// `1 - exp(-x)`: soft shoulder, never clips.
    Exponential,
    /// `x / (1 + x)`: classic Reinhard.
    Reinhard,
    /// Reinhard with a white point, preserving highlight separation.
    ExtendedReinhard,
    /// ACES filmic fit (Narkowicz).
    Aces,
}

/// Optional low/high tone tinting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintConfig {
    /// Tint multiplied into shadows.
    pub low: [f32; 3],
    /// Tint multiplied into highlights.
    pub high: [f32; 3],
}

/// Output color grading: tone curve, gamma, exposure, saturation, tint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Tone mapping curve.
    pub tonemap: ToneMapCurve,
    /// Display gamma. 0.5 dark ~ 3.0 washed.
    pub gamma: f32,
    /// Linear exposure multiplier. 0.1 dim ~ 5.0 blown.
    pub exposure: f32,
    /// Saturation. 0.0 grayscale ~ 2.0 oversaturated.
    pub saturation: f32,
    /// Optional light/dark tone tinting; `None` disables the pass.
    pub tint: Option<TintConfig>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            tonemap: ToneMapCurve::Aces,
            gamma: 1.20,
            exposure: 1.65,
            saturation: 0.95,
            tint: None,
        }
    }
}

/// Terrain-side light colors and intensities.
///
/// The sky pipeline itself only reads the torch fields (for wet reflections);
/// the rest is part of the shared config surface consumed by the terrain
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Sunlight intensity. 0.5 weak ~ 5.0 bright.
    pub sunlight_intensity: f32,
    /// Torchlight intensity. 0.5 weak ~ 3.0 bright.
    pub torchlight_intensity: f32,
    /// Shadow strength. 0.0 no shadow ~ 1.0 strong shadow.
    pub shadow_intensity: f32,
    /// Sunlight color at dawn/dusk.
    pub dawn_sunlight: [f32; 3],
    /// Sunlight color at noon.
    pub noon_sunlight: [f32; 3],
    /// Moonlight color at night.
    pub night_moonlight: [f32; 3],
    /// Ambient light added everywhere in the Nether.
    pub nether_ambient: [f32; 3],
    /// Ambient light added everywhere in the End.
    pub end_ambient: [f32; 3],
    /// Torch color in the Overworld.
    pub overworld_torch: [f32; 3],
    /// Torch color underwater.
    pub underwater_torch: [f32; 3],
    /// Torch color in the Nether.
    pub nether_torch: [f32; 3],
    /// Torch color in the End.
    pub end_torch: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sunlight_intensity: 2.35,
            torchlight_intensity: 0.55,
            shadow_intensity: 1.00,
            dawn_sunlight: [1.00, 0.65, 0.35],
            noon_sunlight: [1.00, 0.85, 0.55],
            night_moonlight: [0.40, 0.45, 1.00],
            nether_ambient: [1.00, 0.40, 0.35],
            end_ambient: [0.95, 0.85, 1.20],
            overworld_torch: [1.00, 0.60, 0.35],
            underwater_torch: [0.30, 0.80, 1.00],
            nether_torch: [1.00, 0.30, 0.10],
            end_torch: [0.60, 0.35, 1.00],
        }
    }
}

/// Optional rainbow overlay strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainbowConfig {
    /// Strength during clear weather. 0.3 subtle ~ 1.7 bright.
    pub clear: f32,
    /// Strength during rain. 0.5 subtle ~ 2.0 bright.
    pub rain: f32,
}

/// Sky gradient palette and shaping factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Below-horizon gradient reshape amount. 0.0 flat ~ 1.0 deep void.
    pub void_factor: f32,
    /// Below-horizon darkening. 0.0 none ~ 1.0 black void.
    pub void_darkness: f32,
    /// How far rain desaturates the sky. 0.0 none ~ 1.0 full.
    pub rain_mix_factor: f32,
    /// Dawn/dusk zenith color.
    pub dawn_zenith: [f32; 3],
    /// Dawn/dusk horizon color.
    pub dawn_horizon: [f32; 3],
    /// Dawn/dusk horizon-edge color.
    pub dawn_edge: [f32; 3],
    /// Day zenith color.
    pub day_zenith: [f32; 3],
    /// Day horizon color.
    pub day_horizon: [f32; 3],
    /// Day horizon-edge color.
    pub day_edge: [f32; 3],
    /// Night zenith color.
    pub night_zenith: [f32; 3],
    /// Night horizon color.
    pub night_horizon: [f32; 3],
    /// Night horizon-edge color.
    pub night_edge: [f32; 3],
    /// Rain zenith color, scaled by scene luminance before blending.
    pub rain_zenith: [f32; 3],
    /// Rain horizon color, scaled by scene luminance before blending.
    pub rain_horizon: [f32; 3],
    /// End zenith color.
    pub end_zenith: [f32; 3],
    /// End horizon color.
    pub end_horizon: [f32; 3],
    /// End streak accent color, also reused by the End galaxy recolor.
    pub end_streak: [f32; 3],
    /// Fog tint when underwater.
    pub underwater_tint: [f32; 3],
    /// Underwater brightness. 0.0 dark ~ 3.0 bright.
    pub underwater_brightness: f32,
    /// Optional rainbow overlay; `None` disables it.
    pub rainbow: Option<RainbowConfig>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            void_factor: 0.5,
            void_darkness: 0.3,
            rain_mix_factor: 0.9,
            dawn_zenith: [0.110, 0.090, 0.140],
            dawn_horizon: [1.000, 0.340, 0.080],
            dawn_edge: [0.900, 0.335, 0.180],
            day_zenith: [0.305, 0.460, 1.000],
            day_horizon: [0.900, 0.900, 1.000],
            day_edge: [0.700, 0.680, 0.800],
            night_zenith: [0.000, 0.010, 0.020],
            night_horizon: [0.000, 0.060, 0.120],
            night_edge: [0.000, 0.020, 0.070],
            rain_zenith: [0.281, 0.344, 0.511],
            rain_horizon: [0.481, 0.544, 0.711],
            end_zenith: [0.002, 0.001, 0.008],
            end_horizon: [0.030, 0.015, 0.062],
            end_streak: [0.320, 0.200, 0.740],
            underwater_tint: [0.20, 1.00, 0.90],
            underwater_brightness: 2.15,
            rainbow: None,
        }
    }
}

/// Shooting star timing and brightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootingStarConfig {
    /// Brightness. 0.2 dim ~ 1.0 bright.
    pub brightness: f32,
    /// Visible streak duration in seconds. 0.4 fast ~ 12.0 slow.
    pub period: f32,
    /// Quiet gap before each streak in seconds. 0.0 none ~ 100.0 long.
    pub delay: f32,
}

impl Default for ShootingStarConfig {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            period: 4.0,
            delay: 6.0,
        }
    }
}

/// Galaxy field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Overworld galaxy brightness; `None` disables the overworld layer.
    /// 0.1 dim ~ 4.0 bright.
    pub overworld: Option<f32>,
    /// End galaxy brightness; `None` disables the End layer.
    /// 0.1 dim ~ 4.0 bright.
    pub end: Option<f32>,
    /// Star color vibrance. 0.0 white ~ 1.0 colorful.
    pub vibrance: f32,
    /// Rotation/warp speed. 0.01 slow ~ 0.2 fast.
    pub speed: f32,
    /// Daytime visibility. 0.0 invisible ~ 1.0 visible.
    pub day_visibility: f32,
    /// Keep the galaxy visible underwater.
    pub show_underwater: bool,
    /// Noise field seed.
    pub seed: u32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            overworld: None,
            end: Some(1.4),
            vibrance: 0.4,
            speed: 0.04,
            day_visibility: 0.0,
            show_underwater: false,
            seed: 0,
        }
    }
}

/// Black hole accent in the End sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackHoleConfig {
    /// Accretion color at low mask values.
    pub color_low: [f32; 3],
    /// Accretion color at high mask values.
    pub color_high: [f32; 3],
    /// Orientation angle in radians. 0.0 ~ 3.14.
    pub orientation: f32,
    /// Apparent distance scale. 1.0 close ~ 4.0 far.
    pub distance_scale: f32,
    /// Swirl animation speed. 0.0 static ~ 2.0 violent.
    pub speed: f32,
}

impl Default for BlackHoleConfig {
    fn default() -> Self {
        Self {
            color_low: [0.52, 0.30, 1.20],
            color_high: [0.80, 0.80, 1.20],
            orientation: 1.96,
            distance_scale: 4.0,
            speed: 0.8,
        }
    }
}

/// Celestial accents: sun/moon paths, shooting star, galaxy, black hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelestialConfig {
    /// Sun disc size. 0.3 tiny ~ 4.0 massive.
    pub sun_size: f32,
    /// Moon disc size. 0.3 tiny ~ 4.0 massive.
    pub moon_size: f32,
    /// Sun path yaw in degrees.
    pub sun_path_yaw: f32,
    /// Moon path yaw in degrees.
    pub moon_path_yaw: f32,
    /// Sun path tilt in degrees.
    pub sun_path_tilt: f32,
    /// Moon path tilt in degrees.
    pub moon_path_tilt: f32,
    /// Sun/moon visibility during rain. 0.0 hidden ~ 1.0 always visible.
    pub rain_visibility: f32,
    /// Shooting star; `None` disables it.
    pub shooting_star: Option<ShootingStarConfig>,
    /// Galaxy field.
    pub galaxy: GalaxyConfig,
    /// Black hole; `None` disables it.
    pub black_hole: Option<BlackHoleConfig>,
}

impl Default for CelestialConfig {
    fn default() -> Self {
        Self {
            sun_size: 1.25,
            moon_size: 1.0,
            sun_path_yaw: 15.0,
            moon_path_yaw: 17.0,
            sun_path_tilt: 31.0,
            moon_path_tilt: -28.0,
            rain_visibility: 0.35,
            shooting_star: Some(ShootingStarConfig::default()),
            galaxy: GalaxyConfig::default(),
            black_hole: Some(BlackHoleConfig::default()),
        }
    }
}

/// Fog and mist settings, consumed by the fog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    /// Fog strength; `None` disables fog. 0.1 subtle ~ 1.0 full sky blend.
    pub strength: Option<f32>,
    /// Mist density. 0.0 none ~ 1.0 misty.
    pub mist_density: f32,
    /// Rain mist opacity; `None` disables it. 0.04 subtle ~ 0.5 thick.
    pub rain_mist_opacity: Option<f32>,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            strength: Some(1.0),
            mist_density: 0.55,
            rain_mist_opacity: Some(0.15),
        }
    }
}

/// Cloud model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudModel {
    /// Blocky vanilla-style clouds.
    Vanilla,
    /// Soft 2D noise clouds.
    Soft,
    /// Rounded raymarched clouds.
    Rounded,
    /// Realistic layered clouds.
    Realistic,
}

/// Cloud settings, consumed by the cloud collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Which cloud model to render.
    pub model: CloudModel,
    /// Cloud slab thickness. 0.5 slim ~ 8.0 fat.
    pub thickness: f32,
    /// Thickness during rain. 0.5 slim ~ 8.0 fat.
    pub rain_thickness: f32,
    /// Opacity. 0.0 invisible ~ 1.0 opaque.
    pub opacity: f32,
    /// Noise scale for the procedural models. 0.003 large ~ 0.3 tiny.
    pub scale: f32,
    /// Drift velocity. 0.0 static ~ 4.0 very fast.
    pub velocity: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            model: CloudModel::Rounded,
            thickness: 2.6,
            rain_thickness: 3.0,
            opacity: 0.8,
            scale: 0.027,
            velocity: 1.2,
        }
    }
}

/// Water surface settings, consumed by the water collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Transparency. 0.0 clear ~ 1.0 vanilla.
    pub transparency: f32,
    /// Surface bump amount. 0.001 plain ~ 0.2 bumpy.
    pub bump: f32,
    /// Wave speed. 0.2 calm ~ 2.0 turbulent.
    pub wave_speed: f32,
    /// Base tint.
    pub tint: [f32; 3],
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            transparency: 1.00,
            bump: 0.12,
            wave_speed: 0.80,
            tint: [0.75, 0.90, 1.00],
        }
    }
}

/// Geometry wave settings, consumed by the vertex collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Plant sway amount; `None` disables it. 0.02 gentle ~ 0.4 violent.
    pub plants: Option<f32>,
    /// Lantern swing amount; `None` disables it. 0.05 subtle ~ 0.4 large.
    pub lanterns: Option<f32>,
    /// Underwater wobble; `None` disables it. 0.02 subtle ~ 0.6 trippy.
    pub underwater: Option<f32>,
    /// Water surface waving.
    pub water: bool,
    /// Wave speed. 0.5 slow ~ 5.0 very fast.
    pub speed: f32,
    /// Wave range in blocks. 6.0 near ~ 32.0 far.
    pub range: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            plants: Some(0.05),
            lanterns: Some(0.16),
            underwater: Some(0.06),
            water: true,
            speed: 2.80,
            range: 10.0,
        }
    }
}

/// Wet ground reflection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    /// Always-on reflection strength; `None` limits reflections to rain and
    /// the End. 0.2 slight ~ 1.0 fully reflective.
    pub always_on: Option<f32>,
    /// Block wetness when raining. 0.0 dry ~ 1.0 fully wet.
    pub rain_wetness: f32,
    /// Puddle patchiness. 0.0 uniform ~ 1.0 strong puddles.
    pub rain_puddles: f32,
    /// Mirror the celestial layers (galaxy, black hole) in the reflection.
    pub celestial_reflection: bool,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            always_on: None,
            rain_wetness: 1.0,
            rain_puddles: 0.8,
            celestial_reflection: false,
        }
    }
}

/// Debug/development settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl WelkinConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("welkin.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: WelkinConfig = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = WelkinConfig::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `welkin.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("welkin.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("welkin.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: WelkinConfig = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
