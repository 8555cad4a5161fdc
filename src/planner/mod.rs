//! Cut scheduling module - turns scene cuts and a beat grid into a cut list

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{BeatGrid, CutInterval, CutList, EnergyCurve, SceneCuts};
use crate::error::BeatCutResult;

pub mod adaptive;
pub mod budget;
pub mod candidates;
pub mod quantize;

/// Clip arrangement strategy.
///
/// The three fixed variants cut every clip to exactly one bar; the adaptive
/// variant sizes clips from the energy curve and is selected implicitly when
/// a curve is supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Bar-length clips with a one-second gap between clips of the same scene
    FixedDelay,
    /// Abutting bar-length clips with a local 2nd/3rd-per-four reorder
    PseudoChrono,
    /// Abutting bar-length clips in uniformly shuffled order
    Random,
    /// Energy-aware variable-length clips
    AdaptiveEnergy(EnergyCurve),
}

impl Strategy {
    /// Parse a fixed-family strategy name (case insensitive)
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        match name.to_lowercase().as_str() {
            "delay" => Ok(Strategy::FixedDelay),
            "pseudochrono" => Ok(Strategy::PseudoChrono),
            "random" => Ok(Strategy::Random),
            other => Err(DomainError::UnknownStrategy(format!(
                "'{}' (expected delay, pseudochrono, or random)",
                other
            ))),
        }
    }

    /// Stable name for logging and output documents
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FixedDelay => "delay",
            Strategy::PseudoChrono => "pseudochrono",
            Strategy::Random => "random",
            Strategy::AdaptiveEnergy(_) => "adaptive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Cut planner - the scheduling entry point.
///
/// A plan is a pure computation over the supplied inputs; all mutable state
/// lives inside one `plan` call, so independent calls may run concurrently.
pub struct CutPlanner;

impl CutPlanner {
    /// Create a new cut planner
    pub fn new() -> Self {
        Self
    }

    /// Build the float cut list for one audio track.
    ///
    /// The returned list starts with the lead-in `(0, first_beat)` (omitted
    /// when the first beat is at zero), followed by bar-aligned clips. The
    /// summed duration can fall short of `audio_length` when the source video
    /// cannot supply enough material; that shortfall is accepted and logged.
    pub fn plan(
        &self,
        scene_cuts: &SceneCuts,
        grid: &BeatGrid,
        audio_length: f64,
        strategy: &Strategy,
        seed: Option<u64>,
    ) -> BeatCutResult<CutList> {
        if !audio_length.is_finite() || audio_length <= 0.0 {
            return Err(DomainError::InvalidAudioLength(format!(
                "audio length must be positive, got {}",
                audio_length
            ))
            .into());
        }
        if grid.first_beat() >= scene_cuts.video_end() {
            return Err(DomainError::InvalidFirstBeat(format!(
                "first beat at {:.3}s lies at or beyond the video end at {:.3}s",
                grid.first_beat(),
                scene_cuts.video_end()
            ))
            .into());
        }

        let bar = grid.bar_duration();
        info!(
            "Planning cut list: strategy={}, tempo={:.2} bpm, bar={:.3}s, audio={:.3}s",
            strategy,
            grid.tempo(),
            bar,
            audio_length
        );

        let mut cut_list = CutList::new();

        // Lead-in before the first beat, exempt from bar alignment
        if grid.first_beat() > 0.0 {
            cut_list.push(CutInterval {
                start: 0.0,
                end: grid.first_beat(),
            });
        }

        let generator = candidates::CandidateGenerator::new(scene_cuts, grid);
        let body = match strategy {
            Strategy::AdaptiveEnergy(curve) => {
                adaptive::AdaptiveScheduler::new(scene_cuts, grid, curve)
                    .schedule(audio_length)
            }
            Strategy::FixedDelay => {
                budget::select_within_budget(generator.delay(), grid, audio_length)
            }
            Strategy::PseudoChrono => {
                budget::select_within_budget(generator.pseudochrono(), grid, audio_length)
            }
            Strategy::Random => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                budget::select_within_budget(generator.random(&mut rng), grid, audio_length)
            }
        };

        for interval in body {
            cut_list.push(interval);
        }

        let total = cut_list.total_duration();
        if audio_length - total > bar + 1e-9 {
            warn!(
                "Coverage shortfall: scheduled {:.3}s of {:.3}s audio, source material exhausted",
                total, audio_length
            );
        }

        info!(
            "Planned {} intervals covering {:.3}s",
            cut_list.len(),
            total
        );
        Ok(cut_list)
    }
}

impl Default for CutPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(Strategy::parse("delay").unwrap(), Strategy::FixedDelay);
        assert_eq!(
            Strategy::parse("pseudochrono").unwrap(),
            Strategy::PseudoChrono
        );
        assert_eq!(Strategy::parse("random").unwrap(), Strategy::Random);
        assert_eq!(Strategy::parse("DELAY").unwrap(), Strategy::FixedDelay);

        assert!(Strategy::parse("adaptive").is_err());
        assert!(Strategy::parse("invalid").is_err());
    }

    #[test]
    fn test_plan_rejects_bad_audio_length() {
        let cuts = SceneCuts::new(vec![0.0, 10.0, 20.0]).unwrap();
        let grid = BeatGrid::new(120.0, 1.0).unwrap();
        let planner = CutPlanner::new();

        assert!(planner
            .plan(&cuts, &grid, 0.0, &Strategy::FixedDelay, None)
            .is_err());
        assert!(planner
            .plan(&cuts, &grid, -5.0, &Strategy::FixedDelay, None)
            .is_err());
    }

    #[test]
    fn test_plan_rejects_first_beat_beyond_video_end() {
        let cuts = SceneCuts::new(vec![0.0, 10.0, 20.0]).unwrap();
        let grid = BeatGrid::new(120.0, 20.0).unwrap();
        let planner = CutPlanner::new();

        assert!(planner
            .plan(&cuts, &grid, 30.0, &Strategy::PseudoChrono, None)
            .is_err());
    }
}
