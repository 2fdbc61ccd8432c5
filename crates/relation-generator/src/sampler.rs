//! Seeded pseudo-random source for the distribution strategies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Deterministic sampler owned by a single generator.
///
/// The same seed always yields the same sequence of uniform and Gaussian
/// draws for a given build of `rand`/`rand_distr`.
pub struct Sampler {
    inner: StdRng,
    seed: u64,
}

impl Sampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Standard normal variate (mean 0, standard deviation 1).
    #[inline]
    pub fn gen_gaussian(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}
