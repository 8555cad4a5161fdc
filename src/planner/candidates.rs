//! Fixed-length candidate generation
//!
//! Slices every scene at or after the first beat into bar-length candidate
//! clips. The arrangement strategies only differ in spacing and ordering;
//! no candidate ever crosses a scene boundary.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::model::{BeatGrid, CutInterval, Scene, SceneCuts};

/// Gap reserved after each clip of the same scene by the delay strategy,
/// so consecutive clips skip ahead instead of replaying abutting material.
pub const DELAY_GAP_SECONDS: f64 = 1.0;

/// Generator of bar-length candidate clips
pub struct CandidateGenerator {
    scenes: Vec<Scene>,
    bar: f64,
}

impl CandidateGenerator {
    /// Create a generator over the scenes usable for the scheduled body.
    ///
    /// Scenes entirely before the first beat are absorbed into the lead-in
    /// and never sliced.
    pub fn new(scene_cuts: &SceneCuts, grid: &BeatGrid) -> Self {
        Self {
            scenes: scene_cuts.scenes_from_first_beat(grid.first_beat()),
            bar: grid.bar_duration(),
        }
    }

    /// Bar-length clips spaced `bar + 1` apart within each scene
    pub fn delay(&self) -> Vec<CutInterval> {
        let step = self.bar + DELAY_GAP_SECONDS;
        let mut candidates = Vec::new();
        for scene in &self.scenes {
            let count = (scene.duration() / step) as usize;
            for n in 0..count {
                let start = scene.start + n as f64 * step;
                candidates.push(CutInterval {
                    start,
                    end: start + self.bar,
                });
            }
        }
        candidates
    }

    /// Abutting bar-length clips with every run of four locally reordered:
    /// the 2nd and 3rd of each run swap places, keeping the result roughly
    /// chronological while breaking strict continuity.
    pub fn pseudochrono(&self) -> Vec<CutInterval> {
        let mut candidates = self.abutting();
        for i in 0..(candidates.len() + 1) / 4 {
            candidates.swap(4 * i + 1, 4 * i + 2);
        }
        candidates
    }

    /// Abutting bar-length clips in uniformly shuffled order
    pub fn random<R: Rng>(&self, rng: &mut R) -> Vec<CutInterval> {
        let mut candidates = self.abutting();
        candidates.shuffle(rng);
        candidates
    }

    /// Pack each scene with abutting bar-length clips; a clip that would
    /// overshoot the scene end is discarded.
    fn abutting(&self) -> Vec<CutInterval> {
        let mut candidates = Vec::new();
        for scene in &self.scenes {
            let count = (scene.duration() / self.bar) as usize;
            for n in 0..count {
                let start = scene.start + n as f64 * self.bar;
                candidates.push(CutInterval {
                    start,
                    end: start + self.bar,
                });
            }
        }
        candidates
    }
}
