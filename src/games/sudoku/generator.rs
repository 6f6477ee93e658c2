//! Puzzle generation for 4x4 sudoku.
//!
//! Starts from a box-valid base square and applies validity-preserving
//! transforms (digit relabeling, row/column swaps within bands and stacks,
//! band and stack swaps), then blanks a random subset of cells to produce
//! the puzzle. Solution uniqueness is not required.

use super::grid::{BLANK, Grid, SIDE};
use crate::rng::GameRng;

/// Number of clue cells left in a generated puzzle.
pub const GIVEN_COUNT: usize = 8;

/// Box-valid 4x4 Latin square used as the transform seed.
const BASE: [[u8; SIDE]; SIDE] = [[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]];

/// A generated puzzle together with the full grid it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Clue grid: blanks are the player-fillable cells.
    pub puzzle: Grid,
    /// The complete valid grid the clues were taken from.
    pub solution: Grid,
}

/// Generates a fresh puzzle from the given RNG stream.
pub fn generate(rng: &mut GameRng) -> GeneratedPuzzle {
    let mut cells = BASE;

    // Relabel digits.
    let mut digits: [u8; SIDE] = [1, 2, 3, 4];
    rng.shuffle(&mut digits);
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = digits[(*cell - 1) as usize];
        }
    }

    // Swap rows within each band, then columns within each stack.
    if rng.coin() {
        cells.swap(0, 1);
    }
    if rng.coin() {
        cells.swap(2, 3);
    }
    if rng.coin() {
        swap_cols(&mut cells, 0, 1);
    }
    if rng.coin() {
        swap_cols(&mut cells, 2, 3);
    }

    // Swap the two bands, then the two stacks.
    if rng.coin() {
        cells.swap(0, 2);
        cells.swap(1, 3);
    }
    if rng.coin() {
        swap_cols(&mut cells, 0, 2);
        swap_cols(&mut cells, 1, 3);
    }

    let solution = Grid(cells);
    debug_assert!(solution.is_solved());

    // Blank a uniform random subset of cells.
    let mut positions: Vec<(usize, usize)> = (0..SIDE)
        .flat_map(|row| (0..SIDE).map(move |col| (row, col)))
        .collect();
    rng.shuffle(&mut positions);

    let mut puzzle = solution;
    for &(row, col) in positions.iter().take(SIDE * SIDE - GIVEN_COUNT) {
        puzzle.set(row, col, BLANK);
    }

    GeneratedPuzzle { puzzle, solution }
}

fn swap_cols(cells: &mut [[u8; SIDE]; SIDE], a: usize, b: usize) {
    for row in cells.iter_mut() {
        row.swap(a, b);
    }
}
