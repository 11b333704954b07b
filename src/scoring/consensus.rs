//! Classic RANSAC consensus counting.

use crate::core::{Estimator, Scoring};
use crate::types::Cost;

/// Cost = number of points whose absolute error exceeds the threshold.
///
/// Every datum casts a binary vote; the cost is always an integer in `[0, N]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsensusCountScoring {
    threshold: f64,
}

impl ConsensusCountScoring {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<E: Estimator> Scoring<E> for ConsensusCountScoring {
    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
        data.iter()
            .filter(|datum| {
                let e = estimator.compute_error(model, datum).abs();
                // NaN errors vote as outliers.
                e.is_nan() || e > self.threshold
            })
            .count() as Cost
    }
}
