//! Error types for session setup and roster changes

use thiserror::Error;

use crate::types::ParticipantId;

/// Rejected roster mutation. The roster is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Player {0} is not part of the session.")]
    UnknownParticipant(ParticipantId),
}

/// Invalid parameters when opening a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("at least one court is required")]
    NoCourts,
    #[error("candidate sample count must be at least 1")]
    NoCandidateSamples,
    #[error("participant {0} listed more than once")]
    DuplicateParticipant(ParticipantId),
}
