//! Deterministic random number generation for deck shuffling.
//!
//! Same seed, same shuffle. Independent streams can be derived for separate
//! purposes (the deck shuffle never shares a stream with anything else), so
//! adding randomness elsewhere does not change which cards get dealt.
//!
//! ```
//! use war_cards::core::GameRng;
//!
//! let mut a = GameRng::new(42).for_context("deck");
//! let mut b = GameRng::new(42).for_context("deck");
//!
//! let mut x = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a fresh seed from the thread RNG, for games started without one.
    #[must_use]
    pub fn random_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// The seed this generator was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream for a named purpose.
    ///
    /// The same context always yields the same stream for the same seed,
    /// across runs and toolchain versions.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
