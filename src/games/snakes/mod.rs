//! Snakes & ladders: a 100-square race with dice, snakes, and ladders.

mod board;
mod rules;
mod types;

pub use board::{FINAL_SQUARE, LADDERS, SNAKES, redirect};
pub use types::SnakesLaddersState;
