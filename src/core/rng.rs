//! Deterministic random number generation.
//!
//! Same seed, same sequence: a shuffled deal can always be reproduced from
//! the seed that produced it.
//!
//! ```
//! use hanabi_score::core::GameRng;
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! GameRng::new(7).shuffle(&mut a);
//! GameRng::new(7).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for reproducible deals.
///
/// Uses ChaCha8 for speed; its output is stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
