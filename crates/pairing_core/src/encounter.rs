//! Encounter history between participants

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{Match, ParticipantId, Team};

/// Counters kept for one unordered pair of participants.
///
/// For the self-pair `(p, p)` only `teammate` is used: it counts the singles
/// matches `p` has played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EncounterWeights {
    /// Times the two have been on opposing sides
    pub opponent: u32,
    /// Times the two have been on the same side
    pub teammate: u32,
}

/// Unordered pair key, smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct PairKey(ParticipantId, ParticipantId);

impl PairKey {
    fn new(a: ParticipantId, b: ParticipantId) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }
}

/// Weighted relationship store over participant ids.
///
/// Pairs without history are not stored and read as zero. Weights only ever
/// grow; nothing is removed for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct EncounterGraph {
    edges: HashMap<PairKey, EncounterWeights>,
}

impl EncounterGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, a: ParticipantId, b: ParticipantId) -> &mut EncounterWeights {
        self.edges.entry(PairKey::new(a, b)).or_default()
    }

    /// Count one more partnership for every pair within the team.
    ///
    /// A singles team bumps its member's self-pair instead.
    pub fn record_teammates(&mut self, team: &Team) {
        match team.members() {
            [solo] => self.entry(*solo, *solo).teammate += 1,
            _ => {
                for (a, b) in team.member_pairs() {
                    self.entry(a, b).teammate += 1;
                }
            }
        }
    }

    /// Count one more meeting for every cross pair of the two teams.
    pub fn record_opponents(&mut self, team_a: &Team, team_b: &Team) {
        for &a in team_a.members() {
            for &b in team_b.members() {
                self.entry(a, b).opponent += 1;
            }
        }
    }

    /// Record both sides' partnerships and the opposition of one match.
    pub fn record_match(&mut self, m: &Match) {
        self.record_teammates(m.team_a());
        self.record_teammates(m.team_b());
        self.record_opponents(m.team_a(), m.team_b());
    }

    pub fn weights(&self, a: ParticipantId, b: ParticipantId) -> EncounterWeights {
        self.edges
            .get(&PairKey::new(a, b))
            .copied()
            .unwrap_or_default()
    }

    pub fn opponent_weight(&self, a: ParticipantId, b: ParticipantId) -> u32 {
        self.weights(a, b).opponent
    }

    pub fn teammate_weight(&self, a: ParticipantId, b: ParticipantId) -> u32 {
        self.weights(a, b).teammate
    }

    /// Number of pairs with any recorded history
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Most times any two distinct participants have met as opponents
    pub fn max_opponent_weight(&self) -> u32 {
        self.edges
            .iter()
            .filter(|(key, _)| key.0 != key.1)
            .map(|(_, w)| w.opponent)
            .max()
            .unwrap_or(0)
    }

    /// Most times any two distinct participants have partnered
    pub fn max_teammate_weight(&self) -> u32 {
        self.edges
            .iter()
            .filter(|(key, _)| key.0 != key.1)
            .map(|(_, w)| w.teammate)
            .max()
            .unwrap_or(0)
    }

    /// All recorded pairs, sorted by id
    pub fn pairs(&self) -> Vec<(ParticipantId, ParticipantId, EncounterWeights)> {
        let mut pairs: Vec<_> = self
            .edges
            .iter()
            .map(|(key, weights)| (key.0, key.1, *weights))
            .collect();
        pairs.sort_by_key(|&(a, b, _)| (a, b));
        pairs
    }
}

#[cfg(test)]
#[path = "encounter_tests.rs"]
mod encounter_tests;
