//! Pairing engine configuration

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Default number of courts in play
pub const DEFAULT_COURTS: usize = 3;

/// Default number of round plans drawn per round before picking the cheapest
pub const DEFAULT_CANDIDATE_SAMPLES: usize = 16;

/// Who gets offered to the match generator when not everyone fits on court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatingPolicy {
    /// Every active participant is shuffled into the generator; leftovers rest
    Shuffle,
    /// Participants with the fewest matches played are seated first
    #[default]
    FewestGames,
}

/// Configuration for a pairing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Courts available each round
    pub courts: usize,
    /// Independent round plans drawn per round (1 = single shuffle)
    pub candidate_samples: usize,
    /// Seating rule when players outnumber seats
    pub seating: SeatingPolicy,
    /// Fixed RNG seed (None = fresh entropy)
    pub seed: Option<u64>,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            courts: DEFAULT_COURTS,
            candidate_samples: DEFAULT_CANDIDATE_SAMPLES,
            seating: SeatingPolicy::default(),
            seed: None,
        }
    }
}

impl PairingConfig {
    /// Config with the given court count and defaults otherwise
    pub fn with_courts(courts: usize) -> Self {
        Self {
            courts,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.courts == 0 {
            return Err(SessionError::NoCourts);
        }
        if self.candidate_samples == 0 {
            return Err(SessionError::NoCandidateSamples);
        }
        Ok(())
    }
}
