//! How many players fit on court, and who gets the seats

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{MatchFormat, ParticipantId, TEAMS_PER_MATCH};

/// Shape of one round: doubles fill courts first, then at most one singles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPlan {
    pub doubles: usize,
    pub singles: usize,
    pub resting: usize,
}

impl SeatPlan {
    pub fn new(players: usize, courts: usize) -> Self {
        let doubles = courts.min(players / MatchFormat::Doubles.players_per_match());
        let left = players - doubles * MatchFormat::Doubles.players_per_match();
        let singles = usize::from(doubles < courts && left >= MatchFormat::Singles.players_per_match());
        Self {
            doubles,
            singles,
            resting: left - singles * MatchFormat::Singles.players_per_match(),
        }
    }

    pub fn matches(&self) -> usize {
        self.doubles + self.singles
    }

    /// Players on court
    pub fn seats(&self) -> usize {
        self.doubles * MatchFormat::Doubles.players_per_match()
            + self.singles * MatchFormat::Singles.players_per_match()
    }
}

/// Expected number of resting participants.
///
/// `team_sizes` lists team sizes in order of preference: the first size fills
/// as many courts as it can, every later size adds at most one match with the
/// remaining players. Each court holds `teams_per_court` teams.
///
/// ```
/// use pairing_core::num_rest;
///
/// assert_eq!(num_rest(11, 3, &[2, 1], 2), 1);
/// assert_eq!(num_rest(2, 3, &[2, 1], 2), 0);
/// assert_eq!(num_rest(1, 3, &[2, 1], 2), 1);
/// ```
pub fn num_rest(participants: usize, courts: usize, team_sizes: &[usize], teams_per_court: usize) -> usize {
    let mut remaining = participants;
    let mut free_courts = courts;

    for (i, &size) in team_sizes.iter().enumerate() {
        let per_match = size * teams_per_court;
        if per_match == 0 || free_courts == 0 {
            continue;
        }
        let mut fitted = free_courts.min(remaining / per_match);
        if i > 0 {
            fitted = fitted.min(1);
        }
        remaining -= fitted * per_match;
        free_courts -= fitted;
    }

    remaining
}

/// Standard badminton-style layout: doubles preferred, singles as fallback.
pub fn num_rest_standard(participants: usize, courts: usize) -> usize {
    num_rest(
        participants,
        courts,
        &[MatchFormat::Doubles.team_size(), MatchFormat::Singles.team_size()],
        TEAMS_PER_MATCH,
    )
}

/// Pick the participants who get a seat this round.
///
/// The pool is shuffled, then stably ordered by `priority` (lowest first) so
/// that ties stay random. The first `seats` participants are returned.
pub fn seat_by_priority<R, K>(
    active: &[ParticipantId],
    priority: impl Fn(ParticipantId) -> K,
    seats: usize,
    rng: &mut R,
) -> Vec<ParticipantId>
where
    R: Rng + ?Sized,
    K: Ord,
{
    let mut pool = active.to_vec();
    pool.shuffle(rng);
    pool.sort_by_key(|&p| priority(p));
    pool.truncate(seats);
    pool
}

#[cfg(test)]
#[path = "seating_tests.rs"]
mod seating_tests;
