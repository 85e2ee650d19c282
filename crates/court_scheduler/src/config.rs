//! Scheduler configuration

use pairing_core::{PairingConfig, SessionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stop once active players drop below this
pub const DEFAULT_MIN_ACTIVE_PLAYERS: usize = 4;

/// How round reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Complete configuration for a scheduling session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub pairing: PairingConfig,
    /// Players numbered `1..=n` at start (None = ask)
    pub initial_players: Option<u32>,
    /// The session ends when fewer players than this are active
    pub min_active_players: usize,
    /// Stop after this many rounds (None = until stopped)
    pub max_rounds: Option<u32>,
    pub format: OutputFormat,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pairing: PairingConfig::default(),
            initial_players: None,
            min_active_players: DEFAULT_MIN_ACTIVE_PLAYERS,
            max_rounds: None,
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid pairing settings: {0}")]
    Pairing(#[from] SessionError),
    #[error("min_active_players must be at least 2, got {0}")]
    MinActiveTooLow(usize),
}

impl SchedulerConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pairing.validate()?;
        // Below two nobody can ever be paired, so the loop would never end.
        if self.min_active_players < 2 {
            return Err(ConfigError::MinActiveTooLow(self.min_active_players));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
