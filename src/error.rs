//! Error taxonomy shared by the engines, the session store, and the service.

use derive_more::{Display, Error};

/// Errors surfaced by the game engines and the session service.
///
/// The first three variants are caller errors; `Internal` signals an engine
/// invariant violation and is treated as a programming defect.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The proposed move is illegal in the current game state.
    #[display("invalid move: {reason}")]
    InvalidMove {
        /// Why the move was rejected.
        reason: String,
    },

    /// No live session with the given identifier.
    #[display("session not found: {id}")]
    SessionNotFound {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The request payload does not match the expected shape.
    #[display("malformed request: {reason}")]
    MalformedRequest {
        /// What was wrong with the payload.
        reason: String,
    },

    /// An engine invariant was violated.
    #[display("internal error: {reason}")]
    Internal {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl GameError {
    /// Creates an `InvalidMove` error.
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        Self::InvalidMove {
            reason: reason.into(),
        }
    }

    /// Creates a `SessionNotFound` error.
    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound { id: id.into() }
    }

    /// Creates a `MalformedRequest` error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            reason: reason.into(),
        }
    }

    /// Creates an `Internal` error.
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }
}
