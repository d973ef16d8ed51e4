//! Wet-ground reflections: resamples the sky for mirrored view directions on
//! rain-soaked (or End) floors, plus the wind-blow streak factor consumed by
//! the rain-mist overlay.

mod reflection;
mod wind;

pub use reflection::apply_wet_reflection;
pub use wind::wind_blow;
