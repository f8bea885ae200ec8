//! Deterministic random number generation for playouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical playouts
//! - **Forkable**: Independent streams per playout or per search worker
//!
//! ## Usage
//!
//! ```
//! use uttt_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a playout
//! let mut playout_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let actions: Vec<usize> = (0..81).collect();
//! assert_ne!(
//!     (0..8).map(|_| *rng.choose(&actions).unwrap()).collect::<Vec<_>>(),
//!     (0..8).map(|_| *playout_rng.choose(&actions).unwrap()).collect::<Vec<_>>(),
//! );
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, which
/// matters for uniform move sampling over thousands of playouts.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
