//! Tests for the session store: lifecycle, eviction, and the per-session
//! serialization guarantee.

use parlor_games::{
    Action, AnyGame, GameError, GameKind, SessionSeeder, SessionStore, SnakesLaddersState,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

fn store(capacity: usize) -> SessionStore {
    SessionStore::new(capacity, SessionSeeder::seeded(42))
}

#[test]
fn get_after_create_returns_the_created_state() {
    let store = store(16);
    let (id, created) = store.create(GameKind::TicTacToe);
    let fetched = store.get(&id, GameKind::TicTacToe).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_on_an_unknown_id_fails() {
    let store = store(16);
    assert!(matches!(
        store.get("no-such-session", GameKind::TicTacToe),
        Err(GameError::SessionNotFound { .. })
    ));
}

#[test]
fn ids_are_unique_across_sessions() {
    let store = store(64);
    let mut ids = std::collections::HashSet::new();
    for _ in 0..32 {
        let (id, _) = store.create(GameKind::Sudoku);
        assert!(ids.insert(id));
    }
}

#[test]
fn update_followed_by_get_returns_the_updated_state() {
    let store = store(16);
    let (id, _) = store.create(GameKind::SnakesAndLadders);

    let replacement = AnyGame::SnakesAndLadders(
        SnakesLaddersState::new().apply_roll(3).unwrap(),
    );
    store.update(&id, replacement.clone()).unwrap();
    assert_eq!(store.get(&id, GameKind::SnakesAndLadders).unwrap(), replacement);
}

#[test]
fn apply_persists_the_new_state() {
    let store = store(16);
    let (id, _) = store.create(GameKind::TicTacToe);

    let after_move = store
        .apply(&id, GameKind::TicTacToe, &Action::Place { position: 4 })
        .unwrap();
    let fetched = store.get(&id, GameKind::TicTacToe).unwrap();
    assert_eq!(fetched, after_move);
}

#[test]
fn rejected_moves_do_not_change_stored_state() {
    let store = store(16);
    let (id, _) = store.create(GameKind::TicTacToe);
    store
        .apply(&id, GameKind::TicTacToe, &Action::Place { position: 4 })
        .unwrap();
    let before = store.get(&id, GameKind::TicTacToe).unwrap();

    let err = store
        .apply(&id, GameKind::TicTacToe, &Action::Place { position: 4 })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidMove { .. }));
    assert_eq!(store.get(&id, GameKind::TicTacToe).unwrap(), before);
}

#[test]
fn a_wrong_kind_lookup_reads_as_not_found() {
    let store = store(16);
    let (id, _) = store.create(GameKind::Sudoku);
    assert!(matches!(
        store.get(&id, GameKind::TicTacToe),
        Err(GameError::SessionNotFound { .. })
    ));
}

#[test]
fn capacity_bound_evicts_the_least_recently_touched_session() {
    let store = store(2);
    let (first, _) = store.create(GameKind::TicTacToe);
    thread::sleep(Duration::from_millis(2));
    let (second, _) = store.create(GameKind::TicTacToe);
    thread::sleep(Duration::from_millis(2));

    // Touch the first session so the second becomes the eviction candidate.
    store.get(&first, GameKind::TicTacToe).unwrap();
    thread::sleep(Duration::from_millis(2));

    let (third, _) = store.create(GameKind::TicTacToe);
    assert_eq!(store.len(), 2);
    assert!(store.get(&first, GameKind::TicTacToe).is_ok());
    assert!(store.get(&third, GameKind::TicTacToe).is_ok());
    assert!(matches!(
        store.get(&second, GameKind::TicTacToe),
        Err(GameError::SessionNotFound { .. })
    ));
}

#[test]
fn concurrent_rolls_on_one_session_serialize() {
    let store = Arc::new(store(16));
    let (id, _) = store.create(GameKind::SnakesAndLadders);
    let successes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            let successes = Arc::clone(&successes);
            thread::spawn(move || {
                for _ in 0..50 {
                    if store
                        .apply(&id, GameKind::SnakesAndLadders, &Action::Roll)
                        .is_ok()
                    {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Every successful roll bumped the move counter exactly once: no roll
    // was skipped or double-applied.
    let AnyGame::SnakesAndLadders(final_state) =
        store.get(&id, GameKind::SnakesAndLadders).unwrap()
    else {
        panic!("kind changed under concurrency");
    };
    assert_eq!(final_state.moves() as usize, successes.load(Ordering::SeqCst));
}

#[test]
fn sessions_do_not_interfere_with_each_other() {
    let store = Arc::new(store(32));
    let ids: Vec<_> = (0..4)
        .map(|_| store.create(GameKind::SnakesAndLadders).0)
        .collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|id| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    let _ = store.apply(&id, GameKind::SnakesAndLadders, &Action::Roll);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for id in &ids {
        let AnyGame::SnakesAndLadders(state) =
            store.get(id, GameKind::SnakesAndLadders).unwrap()
        else {
            panic!("kind changed under concurrency");
        };
        // Each session saw at most its own 25 rolls.
        assert!(state.moves() <= 25);
    }
}
