//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler drawing minimal samples without replacement.
///
/// Indices are drawn uniformly from `[0, n)` and rejected when already
/// present in the sample.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator<usize>,
    range: usize,
}

impl Default for UniformRandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler {
    /// Construct a new sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
            range: 0,
        }
    }

    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
            range: 0,
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn reset(&mut self, n: usize) {
        self.range = n;
        if n > 0 {
            self.rng.reset(0, n - 1);
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    fn sample(&mut self, out_indices: &mut [usize]) -> bool {
        if out_indices.is_empty() || out_indices.len() > self.range {
            return false;
        }
        self.rng.gen_unique(out_indices)
    }
}
