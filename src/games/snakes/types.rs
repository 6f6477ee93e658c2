//! Game state for snakes & ladders.

use serde::{Deserialize, Serialize};

/// Complete snakes & ladders game state.
///
/// A single token races from square 0 to square 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakesLaddersState {
    /// Current token square, 0-100.
    pub(super) player_position: u32,
    /// True once the token reaches square 100.
    pub(super) game_won: bool,
    /// Most recent die draw; 0 before the first roll.
    pub(super) last_roll: u8,
    /// Number of rolls taken.
    pub(super) moves: u32,
}

impl SnakesLaddersState {
    /// Creates a new game with the token off the board at square 0.
    pub fn new() -> Self {
        Self {
            player_position: 0,
            game_won: false,
            last_roll: 0,
            moves: 0,
        }
    }

    /// Returns the current token square.
    pub fn player_position(&self) -> u32 {
        self.player_position
    }

    /// Returns true once the game is won.
    pub fn game_won(&self) -> bool {
        self.game_won
    }

    /// Returns the most recent die draw (0 before the first roll).
    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    /// Returns the number of rolls taken.
    pub fn moves(&self) -> u32 {
        self.moves
    }
}

impl Default for SnakesLaddersState {
    fn default() -> Self {
        Self::new()
    }
}
