//! Game state for 4x4 sudoku.

use super::generator::{GeneratedPuzzle, generate};
use super::grid::Grid;
use crate::rng::GameRng;
use serde::{Deserialize, Serialize};

/// Complete sudoku game state.
///
/// Cells where `puzzle` is non-blank are immutable clues; the player fills
/// the rest in `current_grid`. The generator's ground-truth solution is not
/// carried here: completion is recomputed from the grid itself, so the
/// snapshot holds no internal-only fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuState {
    /// Clue grid; blank cells are player-fillable.
    pub(super) puzzle: Grid,
    /// Player-visible grid, clues included.
    pub(super) current_grid: Grid,
    /// Count of rule violations recorded at write time.
    pub(super) errors: u32,
    /// True once the grid is full and satisfies all constraints.
    pub(super) completed: bool,
}

impl SudokuState {
    /// Creates a new game with a freshly generated puzzle.
    pub fn new(rng: &mut GameRng) -> Self {
        Self::from_generated(generate(rng))
    }

    /// Creates a game from an already generated puzzle.
    pub fn from_generated(generated: GeneratedPuzzle) -> Self {
        Self::from_puzzle(generated.puzzle)
    }

    /// Creates a game from a clue grid.
    pub fn from_puzzle(puzzle: Grid) -> Self {
        Self {
            puzzle,
            current_grid: puzzle,
            errors: 0,
            completed: false,
        }
    }

    /// Returns the clue grid.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Returns the player-visible grid.
    pub fn current_grid(&self) -> &Grid {
        &self.current_grid
    }

    /// Returns the number of recorded rule violations.
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Returns true once the puzzle is solved.
    pub fn completed(&self) -> bool {
        self.completed
    }
}
