//! Length budget selection
//!
//! Truncates a candidate sequence so that the lead-in plus the selected
//! clips never play longer than the audio track. Selection keeps generation
//! order; it never reorders.

use tracing::debug;

use crate::domain::model::{BeatGrid, CutInterval};

/// Select candidates within the audio length budget.
///
/// The budget after the lead-in is `audio_length - first_beat`; it holds
/// `floor(budget / bar)` whole bars, so together with the lead-in the result
/// ends at most one bar before the audio does. When the supply runs out
/// earlier the remaining candidates are returned as they are; the shortfall
/// is accepted.
pub fn select_within_budget(
    mut candidates: Vec<CutInterval>,
    grid: &BeatGrid,
    audio_length: f64,
) -> Vec<CutInterval> {
    let budget = audio_length - grid.first_beat();
    let wanted = if budget > 0.0 {
        (budget / grid.bar_duration()) as usize
    } else {
        0
    };

    debug!(
        "Budget selection: {} bars wanted, {} candidates available",
        wanted,
        candidates.len()
    );

    candidates.truncate(wanted);
    candidates
}
