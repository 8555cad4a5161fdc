// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone)]
pub enum DomainError {
    /// Tempo is zero or negative
    InvalidTempo(String),
    /// Scene cut list is malformed
    InvalidSceneCuts(String),
    /// Audio length is zero or negative
    InvalidAudioLength(String),
    /// Frame rate is zero or negative
    InvalidFrameRate(String),
    /// First beat lies outside the usable range
    InvalidFirstBeat(String),
    /// Energy curve entry is out of range
    InvalidEnergyLevel(String),
    /// Unknown strategy name
    UnknownStrategy(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidTempo(msg) => write!(f, "Invalid tempo: {}", msg),
            DomainError::InvalidSceneCuts(msg) => write!(f, "Invalid scene cuts: {}", msg),
            DomainError::InvalidAudioLength(msg) => write!(f, "Invalid audio length: {}", msg),
            DomainError::InvalidFrameRate(msg) => write!(f, "Invalid frame rate: {}", msg),
            DomainError::InvalidFirstBeat(msg) => write!(f, "Invalid first beat: {}", msg),
            DomainError::InvalidEnergyLevel(msg) => write!(f, "Invalid energy level: {}", msg),
            DomainError::UnknownStrategy(msg) => write!(f, "Unknown strategy: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
