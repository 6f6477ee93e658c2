//! Move application and completion detection for 4x4 sudoku.

use super::grid::{BLANK, SIDE};
use super::types::SudokuState;
use crate::error::GameError;
use tracing::instrument;

impl SudokuState {
    /// Writes `value` into the cell at `(row, col)` and returns the
    /// resulting state. `value = 0` clears the cell.
    ///
    /// A non-blank value that duplicates a digit in its row, column, or box
    /// is still written, but bumps the error counter; the engine records
    /// mistakes rather than rejecting them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the puzzle is completed, the
    /// indices or value are out of range, or the cell is a given clue.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize, value: u8) -> Result<Self, GameError> {
        if self.completed {
            return Err(GameError::invalid_move("puzzle is already completed"));
        }
        if row >= SIDE || col >= SIDE {
            return Err(GameError::invalid_move(format!(
                "cell ({row}, {col}) is out of range (expected 0-3)"
            )));
        }
        if value > 4 {
            return Err(GameError::invalid_move(format!(
                "value {value} is out of range (expected 0-4)"
            )));
        }
        if !self.puzzle.is_blank(row, col) {
            return Err(GameError::invalid_move(format!(
                "cell ({row}, {col}) is a given clue"
            )));
        }

        let mut next = self.clone();
        next.current_grid.set(row, col, value);
        if value != BLANK && next.current_grid.conflicts(row, col, value) {
            next.errors += 1;
        }
        next.completed = next.current_grid.is_solved();
        Ok(next)
    }
}
