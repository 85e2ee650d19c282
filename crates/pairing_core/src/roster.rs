//! Known participants and their active/inactive state

use serde::Serialize;
use std::fmt;

use crate::error::RosterError;
use crate::types::ParticipantId;

/// Outcome of a roster mutation, phrased for the person at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", content = "player", rename_all = "snake_case")]
pub enum RosterChange {
    Added(ParticipantId),
    AlreadyKnown(ParticipantId),
    Deactivated(ParticipantId),
    Reactivated(ParticipantId),
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterChange::Added(p) => write!(f, "Player {} has been added.", p),
            RosterChange::AlreadyKnown(p) => write!(f, "Player {} is already part of the session.", p),
            RosterChange::Deactivated(p) => write!(f, "Player {} is now inactive.", p),
            RosterChange::Reactivated(p) => write!(f, "Player {} is now active again.", p),
        }
    }
}

/// Snapshot of who is in and out, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterStatus {
    /// Active ids, ascending
    pub active: Vec<ParticipantId>,
    /// Inactive ids, ascending
    pub inactive: Vec<ParticipantId>,
    /// Everyone ever added
    pub total: usize,
}

/// All known participants, partitioned into active and inactive.
///
/// Every known participant sits in exactly one of the two lists. Nobody is
/// ever removed; deactivation only moves them across.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    known: Vec<ParticipantId>,
    active: Vec<ParticipantId>,
    inactive: Vec<ParticipantId>,
}

impl Roster {
    /// Start with everyone active. Duplicate ids are kept once.
    pub fn new(participants: impl IntoIterator<Item = ParticipantId>) -> Self {
        let mut roster = Self::default();
        for p in participants {
            roster.add(p);
        }
        roster
    }

    /// Append a new participant to the active set.
    ///
    /// Adding an id that is already known changes nothing.
    pub fn add(&mut self, player: ParticipantId) -> RosterChange {
        if self.is_known(player) {
            return RosterChange::AlreadyKnown(player);
        }
        self.known.push(player);
        self.active.push(player);
        RosterChange::Added(player)
    }

    /// Flip a known participant between active and inactive.
    pub fn toggle(&mut self, player: ParticipantId) -> Result<RosterChange, RosterError> {
        if let Some(idx) = self.active.iter().position(|&p| p == player) {
            self.active.remove(idx);
            self.inactive.push(player);
            Ok(RosterChange::Deactivated(player))
        } else if let Some(idx) = self.inactive.iter().position(|&p| p == player) {
            self.inactive.remove(idx);
            self.active.push(player);
            Ok(RosterChange::Reactivated(player))
        } else {
            Err(RosterError::UnknownParticipant(player))
        }
    }

    pub fn is_known(&self, player: ParticipantId) -> bool {
        self.known.contains(&player)
    }

    pub fn is_active(&self, player: ParticipantId) -> bool {
        self.active.contains(&player)
    }

    /// Everyone ever added, in order of arrival
    pub fn all(&self) -> &[ParticipantId] {
        &self.known
    }

    pub fn active(&self) -> &[ParticipantId] {
        &self.active
    }

    pub fn inactive(&self) -> &[ParticipantId] {
        &self.inactive
    }

    pub fn status(&self) -> RosterStatus {
        let mut active = self.active.clone();
        let mut inactive = self.inactive.clone();
        active.sort_unstable();
        inactive.sort_unstable();
        RosterStatus {
            active,
            inactive,
            total: self.known.len(),
        }
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
