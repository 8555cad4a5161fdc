//! BeatCut Library
//!
//! Schedules beat-synchronized music video cuts: given scene-change
//! timestamps from a source video and the beat grid of a music track, it
//! produces a frame-quantized cut list whose concatenation plays exactly as
//! long as the audio, with every cut landing on a bar boundary.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod planner;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{BeatGrid, CutInterval, CutList, EnergyCurve, Scene, SceneCuts};
pub use error::{BeatCutError, BeatCutResult};
pub use planner::quantize::TimestampQuantizer;
pub use planner::{CutPlanner, Strategy};
