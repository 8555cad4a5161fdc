//! Frame-exact timestamp quantization
//!
//! Snaps every cut boundary to a whole output frame while keeping the
//! cumulative emitted duration locked to the cumulative requested duration.
//! Each interval's frame count absorbs the rounding error of the intervals
//! before it, so drift never accumulates past a single frame.

use crate::domain::errors::DomainError;
use crate::domain::model::{CutInterval, CutList};

/// Guard against float error when a timestamp is already frame-exact:
/// `(k / fps) * fps` can land a hair under `k` and floor to `k - 1`.
const FRAME_EPS: f64 = 1e-6;

/// Quantizer converting float cut boundaries to exact frame multiples
pub struct TimestampQuantizer {
    frame_rate: f64,
}

impl TimestampQuantizer {
    /// Create a quantizer for a target frame rate
    pub fn new(frame_rate: f64) -> Result<Self, DomainError> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(DomainError::InvalidFrameRate(format!(
                "frame rate must be positive, got {}",
                frame_rate
            )));
        }

        Ok(Self { frame_rate })
    }

    /// Target frame rate in frames per second
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Quantize a cut list with running-sum drift correction.
    ///
    /// The emitted length of each interval is not the rounded interval
    /// length; it is sized so the total emitted frames track the total
    /// requested time. Do not simplify this to per-interval rounding.
    pub fn quantize(&self, cut_list: &CutList) -> CutList {
        let fps = self.frame_rate;
        let mut quantized = CutList::new();

        let mut time_sum = 0.0_f64;
        let mut frame_sum = 0_i64;

        for interval in cut_list.intervals() {
            time_sum += interval.duration();

            let start_frame = (interval.start * fps + FRAME_EPS).floor() as i64;
            let length = (time_sum * fps - frame_sum as f64 + FRAME_EPS).floor() as i64;
            let end_frame = start_frame + length.max(0);

            frame_sum += end_frame - start_frame;
            quantized.push(CutInterval {
                start: start_frame as f64 / fps,
                end: end_frame as f64 / fps,
            });
        }

        quantized
    }
}
