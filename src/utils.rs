//! Miscellaneous utilities shared across the crate.
//!
//! Currently a small wrapper around `rand` that draws uniform integers from a
//! resettable range and builds sets of unique indices by rejection.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::prelude::*;

/// Uniform random-number generator over a resettable inclusive range.
///
/// By default this uses an entropy-seeded RNG, but test code can construct it
/// from a fixed seed for reproducible behavior.
pub struct UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    rng: StdRng,
    dist: Option<Uniform<T>>,
}

impl<T> Default for UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    /// Construct with an entropy seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            dist: None,
        }
    }

    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dist: None,
        }
    }

    /// Restart the underlying RNG from `seed`. The configured range is kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Reset the distribution to the inclusive range `[min, max]`.
    pub fn reset(&mut self, min: T, max: T) {
        self.dist = Some(Uniform::new_inclusive(min, max));
    }

    /// Draw one value, or `None` if no range has been configured.
    pub fn next(&mut self) -> Option<T> {
        let dist = self.dist.as_ref()?;
        Some(self.rng.sample(dist))
    }

    /// Fill `out` with unique values from the current range by rejection.
    ///
    /// Returns `false` if no range is configured. The caller must make sure the
    /// range holds at least `out.len()` distinct values, otherwise this never
    /// returns.
    pub fn gen_unique(&mut self, out: &mut [T]) -> bool {
        for i in 0..out.len() {
            loop {
                let Some(candidate) = self.next() else {
                    return false;
                };
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
        self.dist.is_some()
    }
}
