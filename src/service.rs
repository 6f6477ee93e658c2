//! Session service: the single entry point external callers go through.
//!
//! create -> store -> return id + snapshot; id + move -> look up ->
//! delegate to the rules engine -> persist -> return the new snapshot.

use crate::error::GameError;
use crate::games::{Action, AnyGame, GameKind};
use crate::session::{SessionId, SessionStore};
use derive_new::new;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestrates the session store and the rules engines.
#[derive(Debug, Clone, new)]
pub struct GameService {
    store: Arc<SessionStore>,
}

impl GameService {
    /// Starts a new game of the given kind.
    #[instrument(skip(self))]
    pub fn create_game(&self, kind: GameKind) -> (SessionId, AnyGame) {
        let (id, state) = self.store.create(kind);
        info!(game_id = %id, %kind, "new game created");
        (id, state)
    }

    /// Submits a move or roll against an existing session.
    ///
    /// # Errors
    ///
    /// Propagates engine failures unchanged and reports unknown or
    /// wrong-kind ids as [`GameError::SessionNotFound`]. Nothing is
    /// retried: a rejected move leaves the stored state untouched.
    #[instrument(skip(self))]
    pub fn submit(&self, kind: GameKind, id: &str, action: Action) -> Result<AnyGame, GameError> {
        let result = self.store.apply(id, kind, &action);
        if let Err(error) = &result {
            warn!(game_id = %id, %kind, %error, "move rejected");
        }
        result
    }

    /// Returns the current state snapshot of a session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for unknown or wrong-kind ids.
    #[instrument(skip(self))]
    pub fn snapshot(&self, kind: GameKind, id: &str) -> Result<AnyGame, GameError> {
        self.store.get(id, kind)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
