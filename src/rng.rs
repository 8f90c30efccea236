//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random stream a run draws
//! from. Every operator (tournament draws, the SUS offset, crossover cut
//! points, per-gene coin flips, per-locus mutation draws) takes it by mutable
//! reference, so a run is reproducible given its seed and configuration.
//!
//! ## Example
//!
//! ```rust
//! use scqbf_ga::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(10), b.gen_index(10));
//! assert_eq!(a.gen_unit(), b.gen_unit());
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible experiments, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero. Callers only pass population sizes and
    /// chromosome lengths plus one, which are never zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws a real number uniformly from `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Flips a fair coin.
    pub fn gen_coin(&mut self) -> bool {
        self.rng.gen::<bool>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
