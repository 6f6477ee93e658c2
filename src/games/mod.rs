//! Game engines and the tagged union that dispatches over them.

pub mod snakes;
pub mod sudoku;
pub mod tictactoe;

use crate::error::GameError;
use crate::rng::GameRng;
use serde::{Deserialize, Serialize};
use snakes::SnakesLaddersState;
use sudoku::SudokuState;
use tictactoe::TicTacToeState;

/// The three game kinds served by the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum GameKind {
    /// 3x3 tic-tac-toe.
    #[serde(rename = "tictactoe")]
    #[strum(serialize = "tictactoe")]
    TicTacToe,
    /// 4x4 sudoku.
    #[serde(rename = "sudoku")]
    #[strum(serialize = "sudoku")]
    Sudoku,
    /// Snakes & ladders.
    #[serde(rename = "snakeladder")]
    #[strum(serialize = "snakeladder")]
    SnakesAndLadders,
}

/// A proposed move against some game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at a tic-tac-toe position (0-8).
    Place {
        /// Board position in row-major order.
        position: usize,
    },
    /// Write a value into a sudoku cell (0 clears).
    Fill {
        /// Cell row (0-3).
        row: usize,
        /// Cell column (0-3).
        col: usize,
        /// Digit 1-4, or 0 to clear.
        value: u8,
    },
    /// Roll the snakes & ladders die.
    Roll,
}

/// State of a game of any kind.
///
/// One store holds all three kinds; dispatch goes through this enum rather
/// than trait objects so state stays plain data. Serialization is untagged:
/// the wire sees each kind's own field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyGame {
    /// A tic-tac-toe game.
    TicTacToe(TicTacToeState),
    /// A sudoku game.
    Sudoku(SudokuState),
    /// A snakes & ladders game.
    SnakesAndLadders(SnakesLaddersState),
}

impl AnyGame {
    /// Initializes a fresh game of the given kind.
    pub fn create(kind: GameKind, rng: &mut GameRng) -> Self {
        match kind {
            GameKind::TicTacToe => AnyGame::TicTacToe(TicTacToeState::new()),
            GameKind::Sudoku => AnyGame::Sudoku(SudokuState::new(rng)),
            GameKind::SnakesAndLadders => AnyGame::SnakesAndLadders(SnakesLaddersState::new()),
        }
    }

    /// Returns this game's kind.
    pub fn kind(&self) -> GameKind {
        match self {
            AnyGame::TicTacToe(_) => GameKind::TicTacToe,
            AnyGame::Sudoku(_) => GameKind::Sudoku,
            AnyGame::SnakesAndLadders(_) => GameKind::SnakesAndLadders,
        }
    }

    /// Returns true if the game is in a terminal state.
    pub fn is_over(&self) -> bool {
        match self {
            AnyGame::TicTacToe(state) => state.game_over(),
            AnyGame::Sudoku(state) => state.completed(),
            AnyGame::SnakesAndLadders(state) => state.game_won(),
        }
    }

    /// Validates `action` against this state and computes the next state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] for illegal moves, or
    /// [`GameError::Internal`] if the action kind does not match the game
    /// kind (the service checks kinds before dispatching, so a mismatch
    /// here is a defect).
    pub fn apply(&self, action: &Action, rng: &mut GameRng) -> Result<Self, GameError> {
        match (self, action) {
            (AnyGame::TicTacToe(state), Action::Place { position }) => {
                state.apply_move(*position).map(AnyGame::TicTacToe)
            }
            (AnyGame::Sudoku(state), Action::Fill { row, col, value }) => {
                state.apply_move(*row, *col, *value).map(AnyGame::Sudoku)
            }
            (AnyGame::SnakesAndLadders(state), Action::Roll) => {
                state.roll(rng).map(AnyGame::SnakesAndLadders)
            }
            (game, action) => Err(GameError::internal(format!(
                "action {action:?} does not apply to a {} game",
                game.kind()
            ))),
        }
    }
}
