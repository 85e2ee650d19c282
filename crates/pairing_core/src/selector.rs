//! Cost model and match selection
//!
//! A match costs the history it would reinforce: every earlier meeting of two
//! opponents and every earlier partnership of two teammates adds one. Singles
//! sides are charged for the singles matches their player already had.

use serde::Serialize;

use crate::encounter::EncounterGraph;
use crate::types::{Match, Team};

/// A match with its cost at the time it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMatch {
    #[serde(rename = "teams")]
    pub game: Match,
    pub cost: u32,
}

/// Sum of opponent weights over every cross pair of the two sides.
pub fn opponent_cost(graph: &EncounterGraph, m: &Match) -> u32 {
    m.team_a()
        .members()
        .iter()
        .flat_map(|&a| {
            m.team_b()
                .members()
                .iter()
                .map(move |&b| graph.opponent_weight(a, b))
        })
        .sum()
}

/// Sum of teammate weights within the team; a singles side reads its self-pair.
pub fn teammate_cost(graph: &EncounterGraph, team: &Team) -> u32 {
    match team.members() {
        [solo] => graph.teammate_weight(*solo, *solo),
        _ => team
            .member_pairs()
            .map(|(a, b)| graph.teammate_weight(a, b))
            .sum(),
    }
}

pub fn match_cost(graph: &EncounterGraph, m: &Match) -> u32 {
    opponent_cost(graph, m) + teammate_cost(graph, m.team_a()) + teammate_cost(graph, m.team_b())
}

/// Total cost of a set of matches
pub fn plan_cost(graph: &EncounterGraph, matches: &[Match]) -> u32 {
    matches.iter().map(|m| match_cost(graph, m)).sum()
}

/// Keep the `courts` cheapest candidates, cheapest first.
///
/// The sort is stable, so equal costs keep candidate order.
pub fn select_matches(graph: &EncounterGraph, candidates: Vec<Match>, courts: usize) -> Vec<ScoredMatch> {
    let mut scored: Vec<ScoredMatch> = candidates
        .into_iter()
        .map(|game| {
            let cost = match_cost(graph, &game);
            ScoredMatch { game, cost }
        })
        .collect();
    scored.sort_by_key(|s| s.cost);
    scored.truncate(courts);
    scored
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
