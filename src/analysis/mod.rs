//! Analyzer file contracts
//!
//! Scene detection, beat tracking, and intensity estimation run in external
//! tools; this module only reads their JSON result documents and lifts them
//! into validated domain types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::model::{BeatGrid, EnergyCurve, SceneCuts};
use crate::error::{BeatCutError, BeatCutResult};

/// Scene analyzer output: ascending scene-change timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneAnalysis {
    pub cuts: Vec<f64>,
}

/// Beat analyzer output: tempo, first beat offset, and audio length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeatAnalysis {
    pub tempo: f64,
    pub first_beat: f64,
    pub audio_length: f64,
}

/// Intensity analyzer output: one energy level per second of audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    pub levels: Vec<u8>,
}

impl BeatAnalysis {
    /// Build the validated beat grid from this analysis
    pub fn beat_grid(&self) -> BeatCutResult<BeatGrid> {
        Ok(BeatGrid::new(self.tempo, self.first_beat)?)
    }
}

/// Read a scene analysis file and validate its cut timestamps
pub fn load_scene_cuts(path: &Path) -> BeatCutResult<SceneCuts> {
    let analysis: SceneAnalysis = read_json(path)?;
    debug!(
        "Loaded {} scene cut timestamps from {}",
        analysis.cuts.len(),
        path.display()
    );
    Ok(SceneCuts::new(analysis.cuts)?)
}

/// Read a beat analysis file
pub fn load_beat_analysis(path: &Path) -> BeatCutResult<BeatAnalysis> {
    let analysis: BeatAnalysis = read_json(path)?;
    debug!(
        "Loaded beat analysis from {}: tempo={:.2}, first_beat={:.3}, audio_length={:.3}",
        path.display(),
        analysis.tempo,
        analysis.first_beat,
        analysis.audio_length
    );
    Ok(analysis)
}

/// Read an energy analysis file and validate its levels.
///
/// The curve should cover every whole second of the audio; a shorter curve
/// is accepted, with the tail defaulting to level 0.
pub fn load_energy_curve(path: &Path, audio_length: f64) -> BeatCutResult<EnergyCurve> {
    let analysis: EnergyAnalysis = read_json(path)?;
    let curve = EnergyCurve::new(analysis.levels)?;

    let wanted = audio_length.ceil() as usize;
    if curve.len() < wanted {
        warn!(
            "Energy curve covers {}s of {}s audio; uncovered seconds default to level 0",
            curve.len(),
            wanted
        );
    }

    Ok(curve)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> BeatCutResult<T> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BeatCutError::AnalysisReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_str(&content).map_err(|e| BeatCutError::AnalysisFormatError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
