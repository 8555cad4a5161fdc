//! Cut list output document
//!
//! The frame-quantized cut list is handed to the external renderer as a JSON
//! document; this module owns that document's shape, writing, and reading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

pub mod verifier;

use crate::domain::model::{CutInterval, CutList};
use crate::error::{BeatCutError, BeatCutResult};

/// The document handed to the renderer collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutListDocument {
    /// Frame rate every boundary is quantized to
    pub frame_rate: f64,
    /// Strategy that produced the list
    pub strategy: String,
    /// Length of the audio track in seconds
    pub audio_length: f64,
    /// Summed duration of all intervals in seconds
    pub total_duration: f64,
    /// Ordered source-video intervals to concatenate
    pub intervals: Vec<CutInterval>,
}

impl CutListDocument {
    /// Assemble a document from a quantized cut list
    pub fn new(cut_list: &CutList, frame_rate: f64, strategy: &str, audio_length: f64) -> Self {
        Self {
            frame_rate,
            strategy: strategy.to_string(),
            audio_length,
            total_duration: cut_list.total_duration(),
            intervals: cut_list.intervals().to_vec(),
        }
    }

    /// The intervals as a cut list
    pub fn cut_list(&self) -> CutList {
        CutList::from_intervals(self.intervals.clone())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> BeatCutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write a cut list document to a file, creating parent directories
pub fn write_document(document: &CutListDocument, path: &Path) -> BeatCutResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BeatCutError::OutputError {
                message: format!("failed to create output directory: {}", e),
            })?;
        }
    }

    let json = document.to_json()?;
    std::fs::write(path, json).map_err(|e| BeatCutError::OutputError {
        message: format!("failed to write {}: {}", path.display(), e),
    })?;

    info!(
        "Wrote cut list with {} intervals to {}",
        document.intervals.len(),
        path.display()
    );
    Ok(())
}

/// Read a previously written cut list document
pub fn read_document(path: &Path) -> BeatCutResult<CutListDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| BeatCutError::OutputError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    Ok(serde_json::from_str(&content)?)
}
