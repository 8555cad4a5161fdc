//! Energy-aware adaptive scheduling
//!
//! Instead of fixed bar-length clips, each clip holds `2^level` bars where
//! the level is read from the energy curve at the second of audio reached so
//! far. High energy (level 0) cuts every bar; low energy holds a scene for
//! several bars. Scenes are drawn in chronological order without showing the
//! same scene twice in a row while an alternative remains.

use tracing::debug;

use crate::domain::model::{BeatGrid, CutInterval, EnergyCurve, SceneCuts};

/// Per-scene bookkeeping, owned by one scheduling run
struct SceneState {
    start: f64,
    bars_available: u32,
    bars_used: u32,
}

impl SceneState {
    fn bars_left(&self) -> u32 {
        self.bars_available - self.bars_used
    }
}

/// Energy-aware greedy scheduler
pub struct AdaptiveScheduler {
    scenes: Vec<SceneState>,
    bar: f64,
    first_beat: f64,
    curve: EnergyCurve,
}

impl AdaptiveScheduler {
    /// Create a scheduler over the scenes at or after the first beat
    pub fn new(scene_cuts: &SceneCuts, grid: &BeatGrid, curve: &EnergyCurve) -> Self {
        let bar = grid.bar_duration();
        let scenes = scene_cuts
            .scenes_from_first_beat(grid.first_beat())
            .iter()
            .map(|scene| SceneState {
                start: scene.start,
                bars_available: scene.bars_available(bar),
                bars_used: 0,
            })
            .collect();

        Self {
            scenes,
            bar,
            first_beat: grid.first_beat(),
            curve: curve.clone(),
        }
    }

    /// Greedily fill the audio length with variable-length clips.
    ///
    /// Stops early when no scene can supply the next clip without repeating
    /// the one just shown; the resulting shortfall is accepted.
    pub fn schedule(mut self, audio_length: f64) -> Vec<CutInterval> {
        let mut intervals = Vec::new();
        let mut total_length = self.first_beat;
        let mut last_used: Option<usize> = None;
        let mut cursor = 0;

        while total_length < audio_length {
            // Skip scenes with no whole bar left
            while cursor < self.scenes.len() && self.scenes[cursor].bars_left() == 0 {
                cursor += 1;
            }

            let needed = self.curve.bars_at(total_length as usize);

            let picked = (cursor..self.scenes.len())
                .filter(|j| Some(*j) != last_used)
                .find(|j| self.scenes[*j].bars_left() >= needed);

            let Some(j) = picked else {
                debug!(
                    "No scene can supply {} bars without repeating, stopping at {:.3}s",
                    needed, total_length
                );
                break;
            };

            let scene = &mut self.scenes[j];
            let start = scene.start + scene.bars_used as f64 * self.bar;
            let end = start + needed as f64 * self.bar;
            intervals.push(CutInterval { start, end });

            scene.bars_used += needed;
            total_length += needed as f64 * self.bar;
            last_used = Some(j);
        }

        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(
        cuts: Vec<f64>,
        tempo: f64,
        first_beat: f64,
        levels: Vec<u8>,
        audio_length: f64,
    ) -> Vec<CutInterval> {
        let scene_cuts = SceneCuts::new(cuts).unwrap();
        let grid = BeatGrid::new(tempo, first_beat).unwrap();
        let curve = EnergyCurve::new(levels).unwrap();
        AdaptiveScheduler::new(&scene_cuts, &grid, &curve).schedule(audio_length)
    }

    fn scene_of(interval: &CutInterval, cuts: &[f64]) -> usize {
        cuts.windows(2)
            .position(|w| interval.start >= w[0] && interval.end <= w[1])
            .expect("interval crosses a scene boundary")
    }

    #[test]
    fn test_alternates_scenes_and_tracks_energy() {
        // bar = 2s, two scenes of 6 bars each
        let cuts = vec![0.0, 12.0, 24.0];
        let intervals = schedule(cuts.clone(), 120.0, 0.0, vec![0, 0, 1, 2], 20.0);

        // No scene appears twice in a row
        let scenes: Vec<usize> = intervals.iter().map(|c| scene_of(c, &cuts)).collect();
        for pair in scenes.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }

        // Second 2 carries level 1, so the clip placed there spans 2 bars
        assert_eq!(intervals[1].duration(), 4.0);

        // Fills the audio exactly: supply is 24s for a 20s track
        let total: f64 = intervals.iter().map(|c| c.duration()).sum();
        assert_eq!(total, 20.0);
    }

    #[test]
    fn test_clips_stay_inside_their_scene() {
        let cuts = vec![0.0, 7.0, 13.0, 30.0];
        let intervals = schedule(cuts.clone(), 120.0, 0.5, vec![0, 1, 1, 2], 25.0);
        for interval in &intervals {
            scene_of(interval, &cuts);
        }
    }

    #[test]
    fn test_single_scene_stops_after_one_clip() {
        // Only one scene: after the first clip the anti-repeat rule leaves
        // no eligible scene and the run stops short
        let intervals = schedule(vec![0.0, 20.0], 120.0, 0.0, vec![0, 0, 0], 18.0);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].duration(), 2.0);
    }

    #[test]
    fn test_empty_curve_defaults_to_single_bars() {
        let cuts = vec![0.0, 8.0, 16.0];
        let intervals = schedule(cuts.clone(), 120.0, 0.0, vec![], 12.0);
        assert!(intervals.iter().all(|c| c.duration() == 2.0));
        let total: f64 = intervals.iter().map(|c| c.duration()).sum();
        assert_eq!(total, 12.0);
    }

    #[test]
    fn test_oversized_demand_skips_to_capable_scene() {
        // Level 2 asks for 4 bars (8s); only the third scene has that much
        let cuts = vec![0.0, 4.0, 8.0, 30.0];
        let intervals = schedule(cuts.clone(), 120.0, 0.0, vec![2], 8.0);
        assert_eq!(intervals.len(), 1);
        assert_eq!(scene_of(&intervals[0], &cuts), 2);
        assert_eq!(intervals[0].duration(), 8.0);
    }
}
