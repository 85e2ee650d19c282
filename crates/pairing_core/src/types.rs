//! Participants, teams and matches

use serde::Serialize;
use std::fmt;

/// Opaque participant identifier, unique within a session.
pub type ParticipantId = u32;

/// Number of teams facing each other on one court.
pub const TEAMS_PER_MATCH: usize = 2;

/// Team size of a doubles side.
pub const DOUBLES_TEAM_SIZE: usize = 2;

/// Team size of a singles side.
pub const SINGLES_TEAM_SIZE: usize = 1;

/// Whether a team or match is played one-a-side or two-a-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    Singles,
    Doubles,
}

impl MatchFormat {
    /// Players on one side of the net
    pub fn team_size(self) -> usize {
        match self {
            MatchFormat::Singles => SINGLES_TEAM_SIZE,
            MatchFormat::Doubles => DOUBLES_TEAM_SIZE,
        }
    }

    /// Players occupying one court
    pub fn players_per_match(self) -> usize {
        self.team_size() * TEAMS_PER_MATCH
    }
}

/// One side of a match: a single participant or a pair of distinct participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Team {
    members: Vec<ParticipantId>,
}

impl Team {
    pub fn singles(player: ParticipantId) -> Self {
        Self {
            members: vec![player],
        }
    }

    /// Panics if both ids are the same participant.
    pub fn doubles(first: ParticipantId, second: ParticipantId) -> Self {
        assert_ne!(
            first, second,
            "a doubles team needs two distinct participants"
        );
        Self {
            members: vec![first, second],
        }
    }

    pub fn members(&self) -> &[ParticipantId] {
        &self.members
    }

    pub fn format(&self) -> MatchFormat {
        if self.members.len() == SINGLES_TEAM_SIZE {
            MatchFormat::Singles
        } else {
            MatchFormat::Doubles
        }
    }

    pub fn contains(&self, player: ParticipantId) -> bool {
        self.members.contains(&player)
    }

    /// Every unordered pair of distinct members, in member order.
    pub fn member_pairs(&self) -> impl Iterator<Item = (ParticipantId, ParticipantId)> + '_ {
        self.members.iter().enumerate().flat_map(move |(i, &a)| {
            self.members[i + 1..].iter().map(move |&b| (a, b))
        })
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "]")
    }
}

/// Two opposing teams of equal size sharing one court for one round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Match {
    teams: [Team; TEAMS_PER_MATCH],
}

impl Match {
    /// Build a match from two sides.
    ///
    /// Mixing a singles side with a doubles side, or placing a participant on
    /// both sides, is a bug in the caller and panics.
    pub fn new(team_a: Team, team_b: Team) -> Self {
        assert_eq!(
            team_a.format(),
            team_b.format(),
            "malformed match {} vs {}: uneven team sizes",
            team_a,
            team_b
        );
        assert!(
            team_a.members().iter().all(|&p| !team_b.contains(p)),
            "malformed match {} vs {}: participant on both sides",
            team_a,
            team_b
        );
        Self {
            teams: [team_a, team_b],
        }
    }

    pub fn singles(a: ParticipantId, b: ParticipantId) -> Self {
        Self::new(Team::singles(a), Team::singles(b))
    }

    pub fn doubles(a1: ParticipantId, a2: ParticipantId, b1: ParticipantId, b2: ParticipantId) -> Self {
        Self::new(Team::doubles(a1, a2), Team::doubles(b1, b2))
    }

    pub fn team_a(&self) -> &Team {
        &self.teams[0]
    }

    pub fn team_b(&self) -> &Team {
        &self.teams[1]
    }

    pub fn teams(&self) -> &[Team; TEAMS_PER_MATCH] {
        &self.teams
    }

    pub fn format(&self) -> MatchFormat {
        self.teams[0].format()
    }

    /// All participants on court, side A first.
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.teams.iter().flat_map(|team| team.members().iter().copied())
    }

    pub fn contains(&self, player: ParticipantId) -> bool {
        self.teams.iter().any(|team| team.contains(player))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.teams[0], self.teams[1])
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
