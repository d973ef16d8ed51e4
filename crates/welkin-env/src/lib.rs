//! Frame environment for the sky pipeline: world dimension, the per-frame
//! environment snapshot, per-fragment view samples, and the sky clock that
//! derives the day factor and sun/moon paths from a normalized time of day.

mod clock;
mod environment;

pub use clock::{SkyClock, moon_direction_from_time, sun_direction_from_time};
pub use environment::{Dimension, Environment, TorchLight, ViewSample};
