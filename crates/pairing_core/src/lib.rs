//! Pairing engine for rotating doubles/singles sessions
//!
//! This crate provides:
//! - An encounter graph counting how often two participants opposed or partnered
//! - A roster split into active and inactive participants
//! - Match generation across a fixed number of courts
//! - A cost model that prefers matches repeating the least history
//! - A round controller (`Session`) tying it all together
//!
//! # Usage
//!
//! ```
//! use pairing_core::Session;
//!
//! let mut session = Session::new((1..=13).collect(), 3).unwrap();
//! let round = session.play_round();
//! assert_eq!(round.matches.len(), 3);
//! assert_eq!(round.resting.len(), 1);
//! ```

mod config;
mod encounter;
mod error;
mod generator;
mod roster;
mod seating;
mod selector;
mod session;
mod types;

pub use config::*;
pub use encounter::*;
pub use error::*;
pub use generator::*;
pub use roster::*;
pub use seating::*;
pub use selector::*;
pub use session::*;
pub use types::*;
