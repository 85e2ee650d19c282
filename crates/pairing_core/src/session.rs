//! Round controller
//!
//! A [`Session`] owns the roster, the encounter history and the random source
//! for one sitting. Each round runs to completion before the caller gets
//! control back to change the roster:
//!
//! 1. pick matches (round 1: plain shuffle; later rounds: cheapest plan)
//! 2. record them in the encounter graph
//! 3. report who is resting

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::config::{PairingConfig, SeatingPolicy};
use crate::encounter::EncounterGraph;
use crate::error::{RosterError, SessionError};
use crate::generator::generate_candidates;
use crate::roster::{Roster, RosterChange, RosterStatus};
use crate::seating::{seat_by_priority, SeatPlan};
use crate::selector::{match_cost, plan_cost, select_matches, ScoredMatch};
use crate::types::{Match, ParticipantId};

/// How often a participant has played and sat out this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Participation {
    pub played: u32,
    pub rested: u32,
    /// Round number of the most recent rest
    pub last_rested: Option<u32>,
}

/// Everything decided for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    pub matches: Vec<ScoredMatch>,
    /// Active participants without a court, ascending
    pub resting: Vec<ParticipantId>,
}

impl Round {
    pub fn games(&self) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().map(|s| &s.game)
    }
}

/// One pairing session.
pub struct Session<R = StdRng> {
    config: PairingConfig,
    roster: Roster,
    graph: EncounterGraph,
    participation: HashMap<ParticipantId, Participation>,
    rounds_played: u32,
    rng: R,
}

impl Session<StdRng> {
    /// Open a session with default settings on `courts` courts.
    pub fn new(participants: Vec<ParticipantId>, courts: usize) -> Result<Self, SessionError> {
        Self::with_config(participants, PairingConfig::with_courts(courts))
    }

    /// Open a session, seeding the RNG from `config.seed` when given.
    pub fn with_config(
        participants: Vec<ParticipantId>,
        config: PairingConfig,
    ) -> Result<Self, SessionError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(participants, config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Open a session drawing all randomness from `rng`.
    pub fn with_rng(
        participants: Vec<ParticipantId>,
        config: PairingConfig,
        rng: R,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let mut seen = HashSet::with_capacity(participants.len());
        for &p in &participants {
            if !seen.insert(p) {
                return Err(SessionError::DuplicateParticipant(p));
            }
        }

        info!(
            players = participants.len(),
            courts = config.courts,
            seating = ?config.seating,
            "session opened"
        );
        Ok(Self {
            config,
            roster: Roster::new(participants),
            graph: EncounterGraph::new(),
            participation: HashMap::new(),
            rounds_played: 0,
            rng,
        })
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn graph(&self) -> &EncounterGraph {
        &self.graph
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn active_count(&self) -> usize {
        self.roster.active().len()
    }

    pub fn participation(&self, player: ParticipantId) -> Participation {
        self.participation.get(&player).copied().unwrap_or_default()
    }

    pub fn status(&self) -> RosterStatus {
        self.roster.status()
    }

    /// First-round matches: one shuffle of every active participant, no ranking.
    pub fn generate_initial_matches(&mut self) -> Vec<Match> {
        generate_candidates(self.roster.active(), self.config.courts, &mut self.rng)
    }

    /// Matches for a later round, cheapest first.
    pub fn find_new_matches(&mut self) -> Vec<Match> {
        self.find_scored_matches()
            .into_iter()
            .map(|scored| scored.game)
            .collect()
    }

    /// Like [`Session::find_new_matches`], keeping each match's cost.
    ///
    /// Draws up to `candidate_samples` round plans from the seated pool and
    /// ranks the cheapest one.
    pub fn find_scored_matches(&mut self) -> Vec<ScoredMatch> {
        let pool = self.seating_pool();
        let courts = self.config.courts;

        let mut best: Option<(u32, Vec<Match>)> = None;
        for sample in 0..self.config.candidate_samples {
            let candidates = generate_candidates(&pool, courts, &mut self.rng);
            let cost = plan_cost(&self.graph, &candidates);
            debug!(sample, cost, "drew round plan");

            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, candidates));
            }
            if cost == 0 {
                break;
            }
        }

        let candidates = best.map(|(_, plan)| plan).unwrap_or_default();
        select_matches(&self.graph, candidates, courts)
    }

    /// Participants handed to the generator this round.
    fn seating_pool(&mut self) -> Vec<ParticipantId> {
        let active = self.roster.active();
        match self.config.seating {
            SeatingPolicy::Shuffle => active.to_vec(),
            SeatingPolicy::FewestGames => {
                let seats = SeatPlan::new(active.len(), self.config.courts).seats();
                let participation = &self.participation;
                // Fewest matches first; among equals, whoever rested last plays.
                seat_by_priority(
                    active,
                    |p| {
                        let entry = participation.get(&p).copied().unwrap_or_default();
                        (entry.played, Reverse(entry.last_rested))
                    },
                    seats,
                    &mut self.rng,
                )
            }
        }
    }

    /// Record a round's matches in the encounter history.
    ///
    /// Call exactly once per round: every call counts as a new round.
    pub fn update_with_matches(&mut self, matches: &[Match]) {
        for m in matches {
            self.graph.record_match(m);
            for p in m.participants() {
                self.participation.entry(p).or_default().played += 1;
            }
        }
        self.rounds_played += 1;
        for p in self.resting_players(matches) {
            let entry = self.participation.entry(p).or_default();
            entry.rested += 1;
            entry.last_rested = Some(self.rounds_played);
        }
        debug!(
            round = self.rounds_played,
            matches = matches.len(),
            pairs = self.graph.len(),
            "recorded round"
        );
    }

    /// Active participants not on any court, in roster order.
    pub fn resting_players(&self, matches: &[Match]) -> Vec<ParticipantId> {
        let playing: HashSet<ParticipantId> = matches.iter().flat_map(|m| m.participants()).collect();
        self.roster
            .active()
            .iter()
            .copied()
            .filter(|p| !playing.contains(p))
            .collect()
    }

    /// Pick, record and report the next round.
    pub fn play_round(&mut self) -> Round {
        let matches = if self.rounds_played == 0 {
            self.generate_initial_matches()
                .into_iter()
                .map(|game| {
                    let cost = match_cost(&self.graph, &game);
                    ScoredMatch { game, cost }
                })
                .collect()
        } else {
            self.find_scored_matches()
        };

        let games: Vec<Match> = matches.iter().map(|s| s.game.clone()).collect();
        let mut resting = self.resting_players(&games);
        resting.sort_unstable();
        self.update_with_matches(&games);

        info!(
            round = self.rounds_played,
            matches = matches.len(),
            resting = resting.len(),
            "round scheduled"
        );
        Round {
            number: self.rounds_played,
            matches,
            resting,
        }
    }

    pub fn toggle_participant(&mut self, player: ParticipantId) -> Result<RosterChange, RosterError> {
        let result = self.roster.toggle(player);
        match &result {
            Ok(change) => info!(%change, "roster changed"),
            Err(err) => warn!(%err, "toggle rejected"),
        }
        result
    }

    /// Add a participant with no history. Known ids are left as they are.
    pub fn add_participant(&mut self, player: ParticipantId) -> RosterChange {
        let change = self.roster.add(player);
        info!(%change, "roster changed");
        change
    }

    /// Toggle a known participant, add an unknown one.
    pub fn toggle_or_add(&mut self, player: ParticipantId) -> RosterChange {
        match self.roster.toggle(player) {
            Ok(change) => {
                info!(%change, "roster changed");
                change
            }
            Err(RosterError::UnknownParticipant(_)) => self.add_participant(player),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
