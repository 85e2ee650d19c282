//! Parsing of lines typed at the between-rounds prompt

use pairing_core::ParticipantId;
use thiserror::Error;

pub const PLAYER_COUNT_PROMPT: &str = "Enter the number of initial players: ";
pub const ROSTER_PROMPT: &str =
    "Enter player numbers (separated by spaces) to toggle or add (new numbers will be added): ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("'{0}' is not a number of players")]
    NotACount(String),
    #[error("no player count entered")]
    Empty,
}

/// Player numbers from one roster line, plus whatever could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterInput {
    pub players: Vec<ParticipantId>,
    pub ignored: Vec<String>,
}

/// Parse the answer to [`PLAYER_COUNT_PROMPT`].
pub fn parse_player_count(line: &str) -> Result<u32, PromptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| PromptError::NotACount(trimmed.to_string()))
}

/// Split a roster line into player numbers.
///
/// Only plain digit runs count; anything else (signs, names, typos) is kept
/// aside so the caller can warn about it.
pub fn parse_roster_line(line: &str) -> RosterInput {
    let mut input = RosterInput::default();
    for token in line.split_whitespace() {
        let parsed = token
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| token.parse::<ParticipantId>().ok())
            .flatten();
        match parsed {
            Some(player) => input.players.push(player),
            None => input.ignored.push(token.to_string()),
        }
    }
    input
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
