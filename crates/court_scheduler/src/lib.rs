//! Interactive court scheduler
//!
//! This crate wraps `pairing_core` with everything needed to run a club night
//! from a terminal:
//! - Configuration from a TOML file and command-line flags
//! - Parsing of the between-rounds roster prompt
//! - Text and JSON-lines round reports
//! - The round loop itself, generic over input and output streams
//!
//! # Usage
//!
//! ```bash
//! # 13 players on 3 courts, asking for changes after every round
//! cargo run -p court_scheduler -- --players 13 --courts 3
//!
//! # Reproducible schedule, machine-readable output
//! cargo run -p court_scheduler -- --players 16 --seed 7 --format json --rounds 8
//! ```

mod cli;
mod config;
mod prompt;
mod report;
mod runner;

pub use cli::*;
pub use config::*;
pub use prompt::*;
pub use report::*;
pub use runner::*;
