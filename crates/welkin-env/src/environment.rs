//! Per-frame environment snapshot and per-fragment view inputs.

use glam::{Vec2, Vec3};

/// Discrete world category selecting the sky model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Day/night cycle, weather, the familiar blue sky.
    Overworld,
    /// Fog-lit caves; the sky pipeline only contributes torch/ambient colors.
    Nether,
    /// Static violet sky with streaks, galaxy, and the black hole.
    End,
}

/// Frame-scoped snapshot of everything the sky math reads.
///
/// Created once per frame by the host and treated as immutable until the
/// next frame fully replaces it. All components only ever borrow it.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    /// Signed time-of-day factor in `[-1, 1]`: +1 noon, 0 sunrise/sunset,
    /// -1 midnight. The sign step at 0 is masked by dawn weighting in the
    /// color resolver.
    pub day_factor: f32,
    /// Precipitation intensity in `[0, 1]`.
    pub rain_factor: f32,
    /// World dimension.
    pub dimension: Dimension,
    /// Whether the camera is underwater.
    pub underwater: bool,
    /// Unit direction toward the sun.
    pub sun_dir: Vec3,
    /// Unit direction toward the moon.
    pub moon_dir: Vec3,
    /// Host-provided fog color; doubles as a daylight probe for effects that
    /// fade out during the day.
    pub fog_color: Vec3,
}

impl Environment {
    /// Build a snapshot, clamping scalars into range and normalizing the
    /// celestial directions.
    pub fn new(
        day_factor: f32,
        rain_factor: f32,
        dimension: Dimension,
        underwater: bool,
        sun_dir: Vec3,
        moon_dir: Vec3,
        fog_color: Vec3,
    ) -> Self {
        Self {
            day_factor: day_factor.clamp(-1.0, 1.0),
            rain_factor: rain_factor.clamp(0.0, 1.0),
            dimension,
            underwater,
            sun_dir: sun_dir.normalize_or(Vec3::Y),
            moon_dir: moon_dir.normalize_or(-Vec3::Y),
            fog_color: fog_color.max(Vec3::ZERO),
        }
    }

    /// True in the End dimension.
    pub fn is_end(&self) -> bool {
        self.dimension == Dimension::End
    }

    /// True in the Nether dimension.
    pub fn is_nether(&self) -> bool {
        self.dimension == Dimension::Nether
    }
}

/// Per-fragment view inputs, produced by the host for every screen sample.
#[derive(Debug, Clone, Copy)]
pub struct ViewSample {
    /// Unit direction from the camera toward the fragment.
    pub view_dir: Vec3,
    /// Distance from the camera to the fragment.
    pub cam_distance: f32,
    /// Current render distance.
    pub render_distance: f32,
    /// Fragment position relative to the camera; negative `y` marks
    /// below-eye geometry that can carry a reflection.
    pub world_pos: Vec3,
    /// Fragment position tiled to its chunk, for stable per-chunk hashing.
    pub tiled_chunk_pos: Vec3,
}

/// Torch light reaching a fragment.
#[derive(Debug, Clone, Copy)]
pub struct TorchLight {
    /// Torch color for the current dimension.
    pub color: Vec3,
    /// Light levels: `x` is block light, `y` is sky light, both `[0, 1]`.
    pub levels: Vec2,
}
