// Domain models - Core types and data structures

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Highest accepted energy level. `2^6` bars per clip is already far beyond
/// any musical use; anything larger is a configuration error.
pub const MAX_ENERGY_LEVEL: u8 = 6;

/// Beat grid of the audio track - tempo plus the offset of the first beat.
///
/// The derived bar duration (`4 * 60 / tempo`, four beats) is the fundamental
/// quantization unit: every scheduled clip is an integer number of bars long,
/// except the lead-in before the first beat.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatGrid {
    tempo: f64,
    first_beat: f64,
}

impl BeatGrid {
    /// Create a new beat grid with validation
    pub fn new(tempo: f64, first_beat: f64) -> Result<Self, DomainError> {
        if !tempo.is_finite() || tempo <= 0.0 {
            return Err(DomainError::InvalidTempo(format!(
                "tempo must be positive, got {}",
                tempo
            )));
        }
        if !first_beat.is_finite() || first_beat < 0.0 {
            return Err(DomainError::InvalidFirstBeat(format!(
                "first beat must be non-negative, got {}",
                first_beat
            )));
        }

        Ok(Self { tempo, first_beat })
    }

    /// Tempo in beats per minute
    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    /// Time of the first beat in seconds
    pub fn first_beat(&self) -> f64 {
        self.first_beat
    }

    /// Duration of one four-beat bar in seconds
    pub fn bar_duration(&self) -> f64 {
        4.0 * 60.0 / self.tempo
    }
}

/// Ascending scene-change timestamps of the source video.
///
/// The first entry is conventionally 0 and the last one is the video's end.
/// Consecutive entries bound the scenes the scheduler may draw clips from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCuts {
    cuts: Vec<f64>,
}

impl SceneCuts {
    /// Create a new scene cut list with validation
    pub fn new(cuts: Vec<f64>) -> Result<Self, DomainError> {
        if cuts.len() < 2 {
            return Err(DomainError::InvalidSceneCuts(format!(
                "at least 2 cut timestamps required, got {}",
                cuts.len()
            )));
        }
        if cuts.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(DomainError::InvalidSceneCuts(
                "cut timestamps must be non-negative".to_string(),
            ));
        }
        if cuts.windows(2).any(|w| w[1] <= w[0]) {
            return Err(DomainError::InvalidSceneCuts(
                "cut timestamps must be strictly increasing".to_string(),
            ));
        }

        Ok(Self { cuts })
    }

    /// Raw timestamps in seconds
    pub fn timestamps(&self) -> &[f64] {
        &self.cuts
    }

    /// End of the source video in seconds (last timestamp)
    pub fn video_end(&self) -> f64 {
        *self.cuts.last().expect("validated length >= 2")
    }

    /// Number of scenes (one less than the number of timestamps)
    pub fn scene_count(&self) -> usize {
        self.cuts.len() - 1
    }

    /// All scenes as (start, end) spans
    pub fn scenes(&self) -> Vec<Scene> {
        self.cuts
            .windows(2)
            .map(|w| Scene {
                start: w[0],
                end: w[1],
            })
            .collect()
    }

    /// Scenes starting at or after the first beat.
    ///
    /// Material before the first beat is covered by the lead-in interval and
    /// must not reappear in the scheduled body.
    pub fn scenes_from_first_beat(&self, first_beat: f64) -> Vec<Scene> {
        let mut i = 0;
        while i < self.cuts.len() && self.cuts[i] < first_beat {
            i += 1;
        }
        self.cuts[i..]
            .windows(2)
            .map(|w| Scene {
                start: w[0],
                end: w[1],
            })
            .collect()
    }
}

/// A maximal span of source video between two consecutive scene cuts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub start: f64,
    pub end: f64,
}

impl Scene {
    /// Scene duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Number of whole bars this scene can supply
    pub fn bars_available(&self, bar: f64) -> u32 {
        (self.duration() / bar) as u32
    }

    /// Check that an interval lies fully within this scene
    pub fn contains(&self, interval: &CutInterval) -> bool {
        interval.start >= self.start && interval.end <= self.end
    }
}

/// Per-second energy levels of the audio track.
///
/// Index `i` describes the desired clip size, `2^level` bars, for a clip
/// starting at second `i`. Lower levels mean higher intensity and therefore
/// shorter clips. Seconds beyond the curve default to level 0.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyCurve {
    levels: Vec<u8>,
}

impl EnergyCurve {
    /// Create a new energy curve with validation
    pub fn new(levels: Vec<u8>) -> Result<Self, DomainError> {
        if let Some(level) = levels.iter().find(|l| **l > MAX_ENERGY_LEVEL) {
            return Err(DomainError::InvalidEnergyLevel(format!(
                "level {} exceeds maximum {}",
                level, MAX_ENERGY_LEVEL
            )));
        }

        Ok(Self { levels })
    }

    /// Number of covered seconds
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check whether the curve is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Energy level for a given second of output; out-of-range seconds
    /// default to level 0 (fastest cutting).
    pub fn level_at(&self, second: usize) -> u8 {
        self.levels.get(second).copied().unwrap_or(0)
    }

    /// Desired clip length in bars for a given second of output
    pub fn bars_at(&self, second: usize) -> u32 {
        1u32 << self.level_at(second)
    }
}

/// A single (start, end) span of source-video time.
///
/// Built directly by the planner and quantizer, which guarantee the bounds
/// by construction; the quantizer may emit a zero-length interval when a
/// sub-frame request rounds away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutInterval {
    pub start: f64,
    pub end: f64,
}

impl CutInterval {
    /// Interval duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered list of source-video intervals that, concatenated, form the
/// output music video. The sole artifact handed to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CutList {
    intervals: Vec<CutInterval>,
}

impl CutList {
    /// Create an empty cut list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cut list from intervals
    pub fn from_intervals(intervals: Vec<CutInterval>) -> Self {
        Self { intervals }
    }

    /// Append an interval
    pub fn push(&mut self, interval: CutInterval) {
        self.intervals.push(interval);
    }

    /// All intervals in playback order
    pub fn intervals(&self) -> &[CutInterval] {
        &self.intervals
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Summed duration of all intervals in seconds
    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(|c| c.duration()).sum()
    }
}

impl IntoIterator for CutList {
    type Item = CutInterval;
    type IntoIter = std::vec::IntoIter<CutInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}
