//! Move validation and state transitions for tic-tac-toe.

use super::types::{Mark, Square, TicTacToeState, Winner};
use crate::error::GameError;
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl TicTacToeState {
    /// Places the current player's mark at `position` (0-8) and returns the
    /// resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the game is over, the position
    /// is out of range, or the square is occupied.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&self, position: usize) -> Result<Self, GameError> {
        if self.game_over {
            return Err(GameError::invalid_move("game is already over"));
        }
        if position >= 9 {
            return Err(GameError::invalid_move(format!(
                "position {position} is out of range (expected 0-8)"
            )));
        }
        if self.board[position] != Square::Empty {
            return Err(GameError::invalid_move(format!(
                "square {position} is already occupied"
            )));
        }

        let mover = self.current_player;
        let mut next = self.clone();
        next.board[position] = Square::Occupied(mover);

        if next.line_completed_by(mover) {
            next.winner = Some(match mover {
                Mark::X => Winner::X,
                Mark::O => Winner::O,
            });
            next.game_over = true;
        } else if next.board.iter().all(|s| *s != Square::Empty) {
            next.winner = Some(Winner::Tie);
            next.game_over = true;
        } else {
            next.current_player = mover.opponent();
        }

        Ok(next)
    }

    /// Checks whether `mark` holds all three squares of any winning line.
    fn line_completed_by(&self, mark: Mark) -> bool {
        let occupied = Square::Occupied(mark);
        LINES
            .iter()
            .any(|line| line.iter().all(|&pos| self.board[pos] == occupied))
    }
}
