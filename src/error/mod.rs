//! Error handling module for BeatCut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for BeatCut operations
#[derive(Error, Debug)]
pub enum BeatCutError {
    /// Analysis input file not found or unreadable
    #[error("Failed to read analysis file {path}: {message}")]
    AnalysisReadError { path: String, message: String },

    /// Analysis input file has invalid content
    #[error("Invalid analysis data in {path}: {message}")]
    AnalysisFormatError { path: String, message: String },

    /// Configuration file error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Cut scheduling error
    #[error("Scheduling failed: {message}")]
    ScheduleError { message: String },

    /// Cut list output error
    #[error("Failed to write cut list: {message}")]
    OutputError { message: String },

    /// Cut list verification error
    #[error("Verification failed: {message}")]
    VerificationError { message: String },

    /// Domain validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for BeatCut operations
pub type BeatCutResult<T> = std::result::Result<T, BeatCutError>;
