//! Roll application for snakes & ladders.

use super::board::{FINAL_SQUARE, redirect};
use super::types::SnakesLaddersState;
use crate::error::GameError;
use crate::rng::GameRng;
use tracing::instrument;

impl SnakesLaddersState {
    /// Draws a die from `rng` and advances the token.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the game is already won.
    #[instrument(skip_all, fields(position = self.player_position))]
    pub fn roll(&self, rng: &mut GameRng) -> Result<Self, GameError> {
        self.apply_roll(rng.roll_die())
    }

    /// Advances the token by a known die value `d` in `1..=6`.
    ///
    /// A roll that would pass square 100 is clamped to 100 and wins.
    /// Sub-100 landings take the snake or ladder at the landing square,
    /// applied once. The game is won exactly when the token rests on 100,
    /// so the 80 -> 100 ladder wins immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the game is already won or
    /// `d` is not a die value.
    pub fn apply_roll(&self, d: u8) -> Result<Self, GameError> {
        if self.game_won {
            return Err(GameError::invalid_move("game is already won"));
        }
        if !(1..=6).contains(&d) {
            return Err(GameError::internal(format!("die value {d} out of range")));
        }

        let mut next = *self;
        next.last_roll = d;
        next.moves += 1;

        let tentative = self.player_position + u32::from(d);
        next.player_position = if tentative >= FINAL_SQUARE {
            FINAL_SQUARE
        } else {
            redirect(tentative)
        };
        next.game_won = next.player_position == FINAL_SQUARE;

        Ok(next)
    }
}
