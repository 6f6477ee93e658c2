//! Parlor Games library - casual game engines behind a session service.
//!
//! # Architecture
//!
//! - **Games**: pure rules engines for tic-tac-toe, 4x4 sudoku, and
//!   snakes & ladders; states are immutable snapshots
//! - **Session**: volatile store addressing live games by opaque id
//! - **Service**: the single orchestration layer external callers use
//! - **Server**: REST surface over axum, plus a thin news proxy
//!
//! # Example
//!
//! ```
//! use parlor_games::{GameKind, GameService, SessionSeeder, SessionStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(SessionStore::new(16, SessionSeeder::from_entropy()));
//! let service = GameService::new(store);
//! let (game_id, state) = service.create_game(GameKind::TicTacToe);
//! assert!(!state.is_over());
//! # let _ = game_id;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
mod games;
mod news;
mod rng;
mod server;
mod service;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game engines
pub use games::snakes::{FINAL_SQUARE, LADDERS, SNAKES, SnakesLaddersState, redirect};
pub use games::sudoku::{GIVEN_COUNT, GeneratedPuzzle, Grid, SudokuState, generate};
pub use games::tictactoe::{Mark, Square, TicTacToeState, Winner};
pub use games::{Action, AnyGame, GameKind};

// Crate-level exports - News proxy
pub use news::{Article, NewsClient, NewsConfig, NewsRequest, NewsResponse};

// Crate-level exports - Randomness
pub use rng::{GameRng, SessionSeeder};

// Crate-level exports - Server
pub use server::{AppState, CreateGameResponse, FillMove, PlaceMove, StateResponse, router};

// Crate-level exports - Service and session store
pub use service::GameService;
pub use session::{Session, SessionId, SessionStore};
