//! TOML configuration
//!
//! Optional config file holding defaults that CLI flags override.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BeatCutError, BeatCutResult};
use crate::planner::Strategy;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

/// Scheduling defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Default fixed-family strategy when none is given on the command line
    pub strategy: String,
    /// Default target frame rate
    pub frame_rate: f64,
}

/// Logging defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            strategy: "delay".to_string(),
            frame_rate: 30.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BeatCutResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BeatCutError::ConfigError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| BeatCutError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> BeatCutResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> BeatCutResult<()> {
        Strategy::parse(&self.schedule.strategy).map_err(|e| BeatCutError::ConfigError {
            message: e.to_string(),
        })?;

        if !self.schedule.frame_rate.is_finite() || self.schedule.frame_rate <= 0.0 {
            return Err(BeatCutError::ConfigError {
                message: format!(
                    "frame_rate must be positive, got {}",
                    self.schedule.frame_rate
                ),
            });
        }

        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(BeatCutError::ConfigError {
                message: format!("unknown log level '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.schedule.strategy, "delay");
        assert_eq!(config.schedule.frame_rate, 30.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[schedule]\nstrategy = \"pseudochrono\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.schedule.strategy, "pseudochrono");
        // Unset sections keep their defaults
        assert_eq!(config.schedule.frame_rate, 30.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_unknown_strategy() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[schedule]\nstrategy = \"chronological\"").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_bad_frame_rate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[schedule]\nframe_rate = -1.0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_path_falls_back_to_defaults() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.schedule.strategy, "delay");
    }
}
