//! Deterministic random number generation.
//!
//! The engine never reads a global RNG. Role assignment takes a
//! `GameRng`, so tests pin a seed and replay identical shuffles while
//! production play seeds from entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed-addressable RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The originating seed stays observable for logging and
/// replay.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is recorded, so even an entropy-seeded game can be
    /// replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply a uniformly random permutation to a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_entropy_seed_is_observable() {
        let rng = GameRng::from_entropy();
        let replay = GameRng::new(rng.seed());
        assert_eq!(rng.seed(), replay.seed());
    }
}
