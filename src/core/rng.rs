//! Random number generation for shuffles, cuts and dice.
//!
//! ## Key Features
//!
//! - **Seedable**: Same seed produces identical sequence
//! - **Entropy-backed by default**: Engines built with `new()` draw their seed
//!   from the OS, so no determinism is promised unless a seed is supplied
//!
//! ## Usage
//!
//! ```
//! use card_wizard::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_die(20);
//! assert!((1..=20).contains(&roll));
//!
//! // Same seed, same stream
//! let mut again = GameRng::new(42);
//! assert_eq!(again.gen_die(20), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG shared by the deck and dice engines.
///
/// Uses ChaCha8 for speed. The engines make no cryptographic claims about
/// their output.
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

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Roll a single die: uniform in `[1, sides]`.
    ///
    /// Panics if `sides` is zero.
    pub fn gen_die(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_die_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen_one = false;
        let mut seen_max = false;

        for _ in 0..1000 {
            let v = rng.gen_die(4);
            assert!((1..=4).contains(&v));
            seen_one |= v == 1;
            seen_max |= v == 4;
        }

        assert!(seen_one && seen_max);
    }
}
