//! Core domain types for tic-tac-toe.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Player mark in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serialized as `""`, `"X"`, or `"O"` to match the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Mark),
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Square::Empty => "",
            Square::Occupied(Mark::X) => "X",
            Square::Occupied(Mark::O) => "O",
        })
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Mark::X)),
            "O" => Ok(Square::Occupied(Mark::O)),
            other => Err(de::Error::unknown_variant(other, &["", "X", "O"])),
        }
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Player X won.
    X,
    /// Player O won.
    O,
    /// The board filled with no winner.
    #[serde(rename = "tie")]
    Tie,
}

/// Complete tic-tac-toe game state.
///
/// Immutable snapshot: a move produces a fresh state rather than mutating
/// in place, so concurrent readers never observe a torn board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicTacToeState {
    /// Squares in row-major order (0-8).
    pub(super) board: [Square; 9],
    /// Mark that moves next.
    pub(super) current_player: Mark,
    /// Set once the game is decided.
    pub(super) winner: Option<Winner>,
    /// True once no further moves are accepted.
    pub(super) game_over: bool,
}

impl TicTacToeState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: [Square::Empty; 9],
            current_player: Mark::X,
            winner: None,
            game_over: false,
        }
    }

    /// Returns the board squares in row-major order.
    pub fn board(&self) -> &[Square; 9] {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the winner, if the game is decided.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Returns true if no further moves are accepted.
    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}
