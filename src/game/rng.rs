//! Seeded randomness for door placement and simulated picks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG: the same seed places the same prizes and makes the
/// same simulated picks.
#[derive(Clone, Debug)]
pub struct TrialRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TrialRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG. The drawn seed is kept so a run can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform door index in `0..door_count`.
    pub fn pick_door(&mut self, door_count: usize) -> usize {
        self.inner.gen_range(0..door_count)
    }
}
