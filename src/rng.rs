//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a solver
//! run. Every randomized operator (population initialization, selection draws,
//! mutation, crossover cut placement) receives it explicitly as `&mut`, so a run is
//! fully reproducible from its seed.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let position = rng.below(10);
//! assert!(position < 10);
//! ```
//!
//! ## Independent sub-sources
//!
//! A generator must not be shared between threads. Work that is spread across
//! workers gets its own stream through [`RandomNumberGenerator::fork`], which is
//! seeded from the parent and therefore just as reproducible:
//!
//! ```rust
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let mut parent = RandomNumberGenerator::from_seed(42);
//! let mut worker = parent.fork();
//! let _ = worker.uniform();
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the handful of draws the
/// evolutionary operators need.
#[derive(Clone, Debug)]
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
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` must be positive.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "cannot draw from an empty range");
        self.rng.gen_range(0..bound)
    }

    /// Returns a fair random bit.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Derives an independent generator seeded from this one.
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.rng.gen::<u64>())
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
