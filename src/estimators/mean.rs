//! Robust mean of scalar observations.

use crate::core::Estimator;

/// Estimates the mean of scalar data; the error is `datum − mean`.
///
/// The minimal sample is a single value, so every hypothesis is one of the
/// observations. Refinement averages the whole consensus set.
#[derive(Debug, Clone, Copy)]
pub struct MeanEstimator {
    sample_size: usize,
}

impl Default for MeanEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl MeanEstimator {
    pub fn new() -> Self {
        Self { sample_size: 1 }
    }

    /// Hypotheses averaged over `sample_size` observations instead of one.
    pub fn with_sample_size(sample_size: usize) -> Self {
        Self { sample_size }
    }
}

impl Estimator for MeanEstimator {
    type Datum = f64;
    type Model = f64;

    fn sample_size(&self) -> usize {
        self.sample_size
    }

    fn compute_models(&self, data: &[f64], sample: &[usize]) -> Vec<f64> {
        if sample.is_empty() {
            return Vec::new();
        }
        let sum: f64 = sample.iter().map(|&i| data[i]).sum();
        let mean = sum / sample.len() as f64;
        if mean.is_finite() {
            vec![mean]
        } else {
            Vec::new()
        }
    }

    fn compute_error(&self, model: &f64, datum: &f64) -> f64 {
        datum - model
    }
}
