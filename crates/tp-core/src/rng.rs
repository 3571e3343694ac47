//! Deterministic run-level RNG.
//!
//! # Determinism strategy
//!
//! A synthesis run owns exactly one [`RunRng`], seeded once from
//! `PlanConfig::seed` and passed by `&mut` through every zone in catalog
//! order.  There is no process-wide generator: two runs with the same seed
//! and the same zone ordering draw the same sequence and produce
//! byte-identical coordinates.
//!
//! The inner generator is `ChaCha8Rng`, whose output stream is specified and
//! portable across platforms and `rand` versions, unlike `SmallRng`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run-scoped deterministic RNG.
///
/// Used only in single-threaded contexts.  Synthesis is sequential so that
/// draw order, and therefore output, never depends on thread scheduling.
pub struct RunRng(ChaCha8Rng);

impl RunRng {
    pub fn new(seed: u64) -> Self {
        RunRng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Expose the inner generator for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `WeightedIndex`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut ChaCha8Rng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
