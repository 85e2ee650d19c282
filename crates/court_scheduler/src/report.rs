//! Round and session reports

use pairing_core::{EncounterGraph, Participation, ParticipantId, Round, RosterStatus};
use serde::Serialize;

/// One line of JSON output per round
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport<'a> {
    pub round: &'a Round,
    pub status: &'a RosterStatus,
}

/// Per-player totals at the end of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub player: ParticipantId,
    pub active: bool,
    #[serde(flatten)]
    pub participation: Participation,
}

/// End-of-session overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub rounds: u32,
    /// Most times any two players met across the net
    pub max_opponent_repeats: u32,
    /// Most times any two players partnered
    pub max_partner_repeats: u32,
    pub players: Vec<PlayerSummary>,
}

impl SessionSummary {
    pub fn new(rounds: u32, graph: &EncounterGraph, players: Vec<PlayerSummary>) -> Self {
        Self {
            rounds,
            max_opponent_repeats: graph.max_opponent_weight(),
            max_partner_repeats: graph.max_teammate_weight(),
            players,
        }
    }
}

fn id_list(ids: &[ParticipantId]) -> String {
    let items: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Matches and resting players for one round
pub fn format_round(round: &Round) -> String {
    let mut report = String::new();
    report.push_str(&format!("\n--- Round {} ---\n", round.number));

    if round.matches.is_empty() {
        report.push_str("Not enough active players for a match this round.\n");
    }
    for (court, scored) in round.matches.iter().enumerate() {
        report.push_str(&format!(
            "Court {}: {} (repeat cost {})\n",
            court + 1,
            scored.game,
            scored.cost
        ));
    }

    if round.resting.is_empty() {
        report.push_str("No players are resting this round.\n");
    } else {
        report.push_str(&format!(
            "Resting players ({}): {}\n",
            round.resting.len(),
            id_list(&round.resting)
        ));
    }
    report
}

/// Active and inactive lists, as shown before the roster prompt
pub fn format_status(status: &RosterStatus) -> String {
    format!(
        "Active players ({}/{}): {}\nInactive players ({}/{}): {}\n",
        status.active.len(),
        status.total,
        id_list(&status.active),
        status.inactive.len(),
        status.total,
        id_list(&status.inactive)
    )
}

pub fn format_summary(summary: &SessionSummary) -> String {
    let mut report = String::new();
    report.push_str(&format!("\n=== Session finished after {} rounds ===\n", summary.rounds));
    report.push_str(&format!(
        "Most repeated opponents: {}, most repeated partners: {}\n\n",
        summary.max_opponent_repeats, summary.max_partner_repeats
    ));
    report.push_str(&format!("{:<8} {:>8} {:>8}\n", "Player", "Played", "Rested"));
    report.push_str(&"-".repeat(26));
    report.push('\n');
    for p in &summary.players {
        let marker = if p.active { "" } else { " (inactive)" };
        report.push_str(&format!(
            "{:<8} {:>8} {:>8}{}\n",
            p.player, p.participation.played, p.participation.rested, marker
        ));
    }
    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
