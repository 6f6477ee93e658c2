//! Randomness provider for dice rolls and puzzle generation.
//!
//! Each session owns its own [`GameRng`] stream, handed out by a
//! [`SessionSeeder`]. Streams for different sessions are uncorrelated, and a
//! seeded provider reproduces the same per-session sequences for tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Weyl-sequence increment used to derive per-session seeds.
const SEED_STRIDE: u64 = 0x9E3779B97F4A7C15;

/// Deterministic RNG stream backing one game session.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality output.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Creates a stream from an explicit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a stream seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draws a die value uniformly in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Draws a fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Hands each new session an uncorrelated [`GameRng`] stream.
///
/// The entropy-backed provider is the production default; the seeded
/// provider derives session seeds from a base seed and a counter so test
/// runs see reproducible sequences.
#[derive(Debug)]
pub struct SessionSeeder {
    base: Option<u64>,
    counter: AtomicU64,
}

impl SessionSeeder {
    /// Provider that seeds every session from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            base: None,
            counter: AtomicU64::new(0),
        }
    }

    /// Provider that derives session seeds deterministically from `base`.
    #[must_use]
    pub fn seeded(base: u64) -> Self {
        Self {
            base: Some(base),
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the RNG stream for the next session.
    pub fn session_rng(&self) -> GameRng {
        match self.base {
            None => GameRng::from_entropy(),
            Some(base) => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed);
                GameRng::seeded(base ^ n.wrapping_mul(SEED_STRIDE))
            }
        }
    }
}

impl Default for SessionSeeder {
    fn default() -> Self {
        Self::from_entropy()
    }
}
