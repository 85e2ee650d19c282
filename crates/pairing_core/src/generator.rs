//! Candidate match generation
//!
//! Participants are shuffled and then slotted onto courts in order: four at a
//! time for doubles, and a single singles match when a court is still free and
//! at least two players are left over.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Match, MatchFormat, ParticipantId};

/// Slot an already-ordered sequence of participants onto `courts` courts.
///
/// Consumes `order` from the front; whoever is left over is not in any match.
pub fn slot_matches(order: &[ParticipantId], courts: usize) -> Vec<Match> {
    let doubles_size = MatchFormat::Doubles.players_per_match();
    let singles_size = MatchFormat::Singles.players_per_match();

    let mut matches = Vec::with_capacity(courts);
    let mut quads = order.chunks_exact(doubles_size);
    while matches.len() < courts {
        match quads.next() {
            Some(&[a1, a2, b1, b2]) => matches.push(Match::doubles(a1, a2, b1, b2)),
            _ => break,
        }
    }

    let used = matches.len() * doubles_size;
    if matches.len() < courts && order.len() - used >= singles_size {
        matches.push(Match::singles(order[used], order[used + 1]));
    }

    matches
}

/// Shuffle `pool` and slot it onto courts.
pub fn generate_candidates<R: Rng + ?Sized>(
    pool: &[ParticipantId],
    courts: usize,
    rng: &mut R,
) -> Vec<Match> {
    let mut order = pool.to_vec();
    order.shuffle(rng);
    slot_matches(&order, courts)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
