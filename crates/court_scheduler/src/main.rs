//! Court scheduler CLI
//!
//! Plays rounds on the configured courts and asks between rounds which
//! players to toggle or add.

use anyhow::Result;
use court_scheduler::{command, config_from_matches, Scheduler};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the schedule.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let matches = command().get_matches();
    let config = config_from_matches(&matches)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Scheduler::new(config, stdin.lock(), stdout.lock()).run();
    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    result.map(|_| ())
}
