//! Tic-tac-toe: 3x3 board, X moves first, 8 winning lines.

mod rules;
mod types;

pub use types::{Mark, Square, TicTacToeState, Winner};
