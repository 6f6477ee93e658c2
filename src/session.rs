//! Session store: live games addressable by opaque identifiers.
//!
//! States are immutable-and-replaced, never mutated in place, so readers
//! always observe a consistent snapshot. Each session sits behind its own
//! lock, which serializes concurrent mutations of one game while leaving
//! unrelated sessions independent. The map lock is never held while a
//! session lock is taken, and vice versa.

use crate::error::GameError;
use crate::games::{Action, AnyGame, GameKind};
use crate::rng::{GameRng, SessionSeeder};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type SessionId = String;

/// One in-progress game together with its private RNG stream.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    kind: GameKind,
    game: AnyGame,
    rng: GameRng,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session with a fresh id and a newly initialized game.
    fn create(kind: GameKind, mut rng: GameRng) -> Self {
        let game = AnyGame::create(kind, &mut rng);
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            game,
            rng,
            created_at: Utc::now(),
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the game kind.
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Returns the current game state.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies `action` to the game and replaces the stored state.
    fn apply(&mut self, action: &Action) -> Result<AnyGame, GameError> {
        let next = self.game.apply(action, &mut self.rng)?;
        self.game = next.clone();
        Ok(next)
    }
}

/// Bookkeeping kept under the map lock so eviction and kind checks never
/// touch a session lock.
#[derive(Debug)]
struct Entry {
    kind: GameKind,
    touched: Instant,
    session: Arc<Mutex<Session>>,
}

/// Volatile store mapping session ids to live games.
///
/// Bounded: at capacity, inserting a new session evicts the
/// least-recently-touched one.
#[derive(Debug)]
pub struct SessionStore {
    inner: Mutex<HashMap<SessionId, Entry>>,
    capacity: usize,
    seeder: SessionSeeder,
}

impl SessionStore {
    /// Creates a store bounded to `capacity` live sessions.
    #[instrument(skip(seeder))]
    pub fn new(capacity: usize, seeder: SessionSeeder) -> Self {
        info!(capacity, "creating session store");
        Self {
            inner: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            seeder,
        }
    }

    /// Creates a new session of the given kind, returning its id and the
    /// initial state snapshot.
    #[instrument(skip(self))]
    pub fn create(&self, kind: GameKind) -> (SessionId, AnyGame) {
        let session = Session::create(kind, self.seeder.session_rng());
        let id = session.id.clone();
        let snapshot = session.game.clone();

        let mut map = self.inner.lock().expect("session map poisoned");
        while map.len() >= self.capacity {
            evict_lru(&mut map);
        }
        map.insert(
            id.clone(),
            Entry {
                kind,
                touched: Instant::now(),
                session: Arc::new(Mutex::new(session)),
            },
        );
        drop(map);

        info!(session_id = %id, %kind, "created session");
        (id, snapshot)
    }

    /// Returns a snapshot of the session's current state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if the id is unknown, evicted,
    /// or belongs to a different game kind.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str, kind: GameKind) -> Result<AnyGame, GameError> {
        let handle = self.checkout(id, kind)?;
        let session = handle.lock().expect("session poisoned");
        Ok(session.game.clone())
    }

    /// Applies `action` to the session's game and persists the new state.
    ///
    /// The session's lock is held for the whole validate-apply-replace
    /// step, so concurrent moves against one game are serialized.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] for unknown ids or kind
    /// mismatches, and propagates engine errors unchanged.
    #[instrument(skip(self))]
    pub fn apply(&self, id: &str, kind: GameKind, action: &Action) -> Result<AnyGame, GameError> {
        let handle = self.checkout(id, kind)?;
        let mut session = handle.lock().expect("session poisoned");
        session.apply(action)
    }

    /// Replaces the session's stored state wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionNotFound`] if the id is unknown or the
    /// replacement state is of a different kind than the session.
    #[instrument(skip(self, state))]
    pub fn update(&self, id: &str, state: AnyGame) -> Result<(), GameError> {
        let handle = self.checkout(id, state.kind())?;
        let mut session = handle.lock().expect("session poisoned");
        session.game = state;
        Ok(())
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("session map poisoned").len()
    }

    /// Returns true if the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a session handle, bumping its recency.
    fn checkout(&self, id: &str, kind: GameKind) -> Result<Arc<Mutex<Session>>, GameError> {
        let mut map = self.inner.lock().expect("session map poisoned");
        let entry = map.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "session not found");
            GameError::session_not_found(id)
        })?;
        if entry.kind != kind {
            // The contract addresses sessions per endpoint family, so a
            // wrong-kind id is indistinguishable from an absent one.
            warn!(session_id = id, expected = %kind, actual = %entry.kind, "kind mismatch");
            return Err(GameError::session_not_found(id));
        }
        entry.touched = Instant::now();
        Ok(Arc::clone(&entry.session))
    }
}

/// Removes the least-recently-touched entry. In-flight operations on an
/// evicted session finish on their own handle; later lookups miss.
fn evict_lru(map: &mut HashMap<SessionId, Entry>) {
    let Some(oldest) = map
        .iter()
        .min_by_key(|(_, entry)| entry.touched)
        .map(|(id, _)| id.clone())
    else {
        return;
    };
    warn!(session_id = %oldest, "store at capacity, evicting least-recently-touched session");
    map.remove(&oldest);
}
