//! Command-line flags

use anyhow::{Context, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use pairing_core::SeatingPolicy;
use std::path::PathBuf;

use crate::config::{OutputFormat, SchedulerConfig};

pub fn command() -> Command {
    Command::new("court-scheduler")
        .version(clap::crate_version!())
        .about("Schedules rotating doubles/singles rounds, avoiding repeat partners and opponents")
        .arg(
            arg!(--config <FILE> "Path to a TOML file with SchedulerConfig settings")
                .value_parser(value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            arg!(-p --players <N> "Number of players at the start (asked for when omitted)")
                .value_parser(value_parser!(u32))
                .required(false),
        )
        .arg(
            arg!(-c --courts <N> "Courts available each round")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(--seed <SEED> "Fix the random seed")
                .value_parser(value_parser!(u64))
                .required(false),
        )
        .arg(
            arg!(--samples <N> "Round plans drawn per round; the cheapest is used")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(--seating <POLICY> "Who plays when not everyone fits")
                .value_parser(["fewest-games", "shuffle"])
                .required(false),
        )
        .arg(
            arg!(--"min-active" <N> "End the session below this many active players")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            arg!(-r --rounds <N> "Stop after this many rounds")
                .value_parser(value_parser!(u32))
                .required(false),
        )
        .arg(
            arg!(--format <FORMAT> "Report format")
                .value_parser(["text", "json"])
                .required(false),
        )
}

/// Build the effective configuration: file first, then flags on top.
pub fn config_from_matches(matches: &ArgMatches) -> Result<SchedulerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SchedulerConfig::default(),
    };

    if let Some(&players) = matches.get_one::<u32>("players") {
        config.initial_players = Some(players);
    }
    if let Some(&courts) = matches.get_one::<usize>("courts") {
        config.pairing.courts = courts;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.pairing.seed = Some(seed);
    }
    if let Some(&samples) = matches.get_one::<usize>("samples") {
        config.pairing.candidate_samples = samples;
    }
    if let Some(seating) = matches.get_one::<String>("seating") {
        config.pairing.seating = match seating.as_str() {
            "shuffle" => SeatingPolicy::Shuffle,
            _ => SeatingPolicy::FewestGames,
        };
    }
    if let Some(&min_active) = matches.get_one::<usize>("min-active") {
        config.min_active_players = min_active;
    }
    if let Some(&rounds) = matches.get_one::<u32>("rounds") {
        config.max_rounds = Some(rounds);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = match format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
