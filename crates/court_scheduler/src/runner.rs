//! The round-by-round session loop
//!
//! Each iteration plays a round, prints it, shows the roster and then waits
//! for a line of player numbers: known numbers are toggled between active and
//! inactive, new numbers join the session. End of input stops the session.

use anyhow::{bail, Context, Result};
use pairing_core::{ParticipantId, Session};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::{OutputFormat, SchedulerConfig};
use crate::prompt::{parse_player_count, parse_roster_line, PLAYER_COUNT_PROMPT, ROSTER_PROMPT};
use crate::report::{format_round, format_status, format_summary, PlayerSummary, RoundReport, SessionSummary};

/// Drives one session between a reader (the keyboard) and a writer (the screen).
pub struct Scheduler<I, O> {
    config: SchedulerConfig,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Scheduler<I, O> {
    pub fn new(config: SchedulerConfig, input: I, output: O) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Read one line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        Ok((read > 0).then_some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.config.format == OutputFormat::Text {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        self.read_line()
    }

    fn initial_players(&mut self) -> Result<u32> {
        if let Some(count) = self.config.initial_players {
            return Ok(count);
        }
        loop {
            let Some(line) = self.ask(PLAYER_COUNT_PROMPT)? else {
                bail!("input ended before a player count was given");
            };
            match parse_player_count(&line) {
                Ok(count) => return Ok(count),
                Err(err) => {
                    warn!(%err, "bad player count");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn apply_roster_line(&mut self, session: &mut Session, line: &str) -> Result<()> {
        let input = parse_roster_line(line);
        for token in &input.ignored {
            warn!(token = token.as_str(), "ignored roster input");
            if self.config.format == OutputFormat::Text {
                writeln!(self.output, "Ignoring '{}': not a player number.", token)?;
            }
        }
        for player in input.players {
            let change = session.toggle_or_add(player);
            if self.config.format == OutputFormat::Text {
                writeln!(self.output, "{}", change)?;
            }
        }
        Ok(())
    }

    /// Run until too few players remain, the round limit is hit, or input ends.
    pub fn run(mut self) -> Result<SessionSummary> {
        let count = self.initial_players()?;
        let players: Vec<ParticipantId> = (1..=count).collect();
        let mut session = Session::with_config(players, self.config.pairing.clone())
            .context("failed to open session")?;

        while session.active_count() >= self.config.min_active_players {
            let round = session.play_round();
            let status = session.status();

            match self.config.format {
                OutputFormat::Text => {
                    write!(self.output, "{}", format_round(&round))?;
                }
                OutputFormat::Json => {
                    let line = serde_json::to_string(&RoundReport {
                        round: &round,
                        status: &status,
                    })?;
                    writeln!(self.output, "{}", line)?;
                }
            }

            if self
                .config
                .max_rounds
                .is_some_and(|max| session.rounds_played() >= max)
            {
                info!(rounds = session.rounds_played(), "round limit reached");
                break;
            }

            if self.config.format == OutputFormat::Text {
                write!(self.output, "{}", format_status(&status))?;
            }
            let Some(line) = self.ask(ROSTER_PROMPT)? else {
                info!("input closed, ending session");
                break;
            };
            self.apply_roster_line(&mut session, &line)?;
        }

        let summary = summarize(&session);
        match self.config.format {
            OutputFormat::Text => write!(self.output, "{}", format_summary(&summary))?,
            OutputFormat::Json => writeln!(self.output, "{}", serde_json::to_string(&summary)?)?,
        }
        self.output.flush()?;
        Ok(summary)
    }
}

fn summarize(session: &Session) -> SessionSummary {
    let mut ids = session.roster().all().to_vec();
    ids.sort_unstable();
    let players = ids
        .into_iter()
        .map(|player| PlayerSummary {
            player,
            active: session.roster().is_active(player),
            participation: session.participation(player),
        })
        .collect();
    SessionSummary::new(session.rounds_played(), session.graph(), players)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
