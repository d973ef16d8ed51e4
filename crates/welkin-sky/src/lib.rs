//! Sky color synthesis: resolves the per-frame zenith/horizon/edge triad from
//! the environment, renders the per-pixel gradient for the Overworld and End
//! skies, and grades the final HDR color for display.

mod grading;
mod gradient;
mod triad;

pub use grading::grade;
pub use gradient::{render_sky, spectrum};
pub use triad::SkyColorTriad;
