//! Cut list verification
//!
//! Re-checks a produced cut list document against the analysis inputs it was
//! built from: scene containment, frame alignment, and the length budget.

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{BeatGrid, SceneCuts};
use crate::output::CutListDocument;

/// Tolerance when testing whether a boundary sits on a frame
const ALIGNMENT_EPS: f64 = 1e-6;

/// A single verification check result
#[derive(Debug, Clone, Serialize)]
pub struct VerificationCheck {
    pub name: String,
    pub success: bool,
    pub details: String,
}

/// Full verification report
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub success: bool,
    pub checks: Vec<VerificationCheck>,
}

/// Verifier for cut list documents
pub struct CutListVerifier {
    frame_rate: f64,
}

impl CutListVerifier {
    /// Create a verifier for a target frame rate
    pub fn new(frame_rate: f64) -> Result<Self, DomainError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(DomainError::InvalidFrameRate(format!(
                "frame rate must be positive, got {}",
                frame_rate
            )));
        }

        Ok(Self { frame_rate })
    }

    /// Run all checks against the analysis inputs
    pub fn verify(
        &self,
        document: &CutListDocument,
        scene_cuts: &SceneCuts,
        grid: &BeatGrid,
        audio_length: f64,
    ) -> VerificationReport {
        info!(
            "Verifying cut list: {} intervals, fps={:.3}",
            document.intervals.len(),
            self.frame_rate
        );

        let checks = vec![
            self.check_scene_containment(document, scene_cuts, grid),
            self.check_frame_alignment(document),
            self.check_length_budget(document, grid, audio_length),
        ];

        let success = checks.iter().all(|c| c.success);
        if !success {
            warn!("Cut list verification failed");
        }

        VerificationReport { success, checks }
    }

    /// Every interval must lie inside exactly one scene, up to one frame of
    /// slack on either side: quantization floors each boundary to a frame,
    /// so a legitimate boundary can land just outside the scene it was cut
    /// from. The lead-in, when present as the first interval starting at
    /// zero and ending at or before the first beat, is exempt.
    fn check_scene_containment(
        &self,
        document: &CutListDocument,
        scene_cuts: &SceneCuts,
        grid: &BeatGrid,
    ) -> VerificationCheck {
        let scenes = scene_cuts.scenes();
        let frame = 1.0 / self.frame_rate;
        let mut violations = Vec::new();

        for (index, interval) in document.intervals.iter().enumerate() {
            let is_lead_in = index == 0
                && interval.start == 0.0
                && interval.end <= grid.first_beat() + frame;
            if is_lead_in {
                continue;
            }

            let contained = scenes.iter().any(|scene| {
                interval.start >= scene.start - frame && interval.end <= scene.end + frame
            });
            if !contained {
                violations.push(index);
            }
        }

        if violations.is_empty() {
            VerificationCheck {
                name: "scene containment".to_string(),
                success: true,
                details: format!("{} intervals within scene bounds", document.intervals.len()),
            }
        } else {
            VerificationCheck {
                name: "scene containment".to_string(),
                success: false,
                details: format!("intervals {:?} cross scene boundaries", violations),
            }
        }
    }

    /// Every boundary must be a whole multiple of the frame duration
    fn check_frame_alignment(&self, document: &CutListDocument) -> VerificationCheck {
        let mut violations = Vec::new();

        for (index, interval) in document.intervals.iter().enumerate() {
            let start_frames = interval.start * self.frame_rate;
            let end_frames = interval.end * self.frame_rate;
            if (start_frames - start_frames.round()).abs() > ALIGNMENT_EPS
                || (end_frames - end_frames.round()).abs() > ALIGNMENT_EPS
            {
                violations.push(index);
            }
        }

        if violations.is_empty() {
            VerificationCheck {
                name: "frame alignment".to_string(),
                success: true,
                details: format!("all boundaries aligned to 1/{:.3}s frames", self.frame_rate),
            }
        } else {
            VerificationCheck {
                name: "frame alignment".to_string(),
                success: false,
                details: format!("intervals {:?} not frame aligned", violations),
            }
        }
    }

    /// The summed duration must not exceed the audio length by more than a
    /// frame. A shortfall is reported but accepted.
    fn check_length_budget(
        &self,
        document: &CutListDocument,
        grid: &BeatGrid,
        audio_length: f64,
    ) -> VerificationCheck {
        let total: f64 = document.intervals.iter().map(|c| c.duration()).sum();
        let frame = 1.0 / self.frame_rate;

        if total > audio_length + frame {
            return VerificationCheck {
                name: "length budget".to_string(),
                success: false,
                details: format!(
                    "cut list plays {:.3}s but the audio is only {:.3}s",
                    total, audio_length
                ),
            };
        }

        let details = if audio_length - total > grid.bar_duration() + frame {
            format!(
                "{:.3}s of {:.3}s audio covered (shortfall accepted)",
                total, audio_length
            )
        } else {
            format!("{:.3}s of {:.3}s audio covered", total, audio_length)
        };

        VerificationCheck {
            name: "length budget".to_string(),
            success: true,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CutInterval, CutList};

    fn document(intervals: Vec<(f64, f64)>) -> CutListDocument {
        let list = CutList::from_intervals(
            intervals
                .into_iter()
                .map(|(start, end)| CutInterval { start, end })
                .collect(),
        );
        CutListDocument::new(&list, 30.0, "delay", 13.0)
    }

    fn fixtures() -> (SceneCuts, BeatGrid) {
        (
            SceneCuts::new(vec![0.0, 10.0, 20.0, 30.0]).unwrap(),
            BeatGrid::new(120.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn test_valid_document_passes() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        let doc = document(vec![(0.0, 1.0), (10.0, 12.0), (14.0, 16.0), (20.0, 22.0)]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(report.success, "{:?}", report.checks);
    }

    #[test]
    fn test_quantized_boundary_one_frame_outside_scene_passes() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        // Frame-aligned boundaries flooring to just outside their scenes:
        // 299/30 sits one frame before the cut at 10, 601/30 one frame
        // after the cut at 20
        let doc = document(vec![
            (0.0, 1.0),
            (299.0 / 30.0, 12.0),
            (14.0, 601.0 / 30.0),
        ]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(report.checks[0].success, "{:?}", report.checks);
    }

    #[test]
    fn test_scene_crossing_interval_fails() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        // (9, 11) spans the cut at 10
        let doc = document(vec![(0.0, 1.0), (9.0, 11.0)]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(!report.success);
        assert!(!report.checks[0].success);
    }

    #[test]
    fn test_misaligned_boundary_fails() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        // 10.017 is not a multiple of 1/30
        let doc = document(vec![(0.0, 1.0), (10.017, 12.0)]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(!report.success);
        assert!(!report.checks[1].success);
    }

    #[test]
    fn test_overlong_list_fails_budget() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        let doc = document(vec![(0.0, 1.0), (10.0, 20.0), (20.0, 30.0)]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(!report.success);
        assert!(!report.checks[2].success);
    }

    #[test]
    fn test_shortfall_is_accepted() {
        let (cuts, grid) = fixtures();
        let verifier = CutListVerifier::new(30.0).unwrap();
        let doc = document(vec![(0.0, 1.0), (10.0, 12.0)]);

        let report = verifier.verify(&doc, &cuts, &grid, 13.0);
        assert!(report.success);
        assert!(report.checks[2].details.contains("shortfall"));
    }
}
