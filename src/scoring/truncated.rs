//! MSAC-style truncated quadratic scoring.

use crate::core::{Estimator, Scoring};
use crate::types::Cost;

/// Cost = `Σ min(e², t²)`.
///
/// Inliers contribute their squared error, outliers a constant `t²`, so the
/// cost lies in `[0, N·t²]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedQuadraticScoring {
    threshold: f64,
}

impl TruncatedQuadraticScoring {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<E: Estimator> Scoring<E> for TruncatedQuadraticScoring {
    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
        let cap = self.threshold * self.threshold;
        data.iter()
            .map(|datum| {
                let e = estimator.compute_error(model, datum);
                // `f64::min` maps a NaN loss to the cap.
                (e * e).min(cap)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::TruncatedQuadraticScoring;
    use crate::core::Scoring;
    use crate::scoring::test_support::ResidualEstimator;
    use approx::assert_relative_eq;

    #[test]
    fn equals_sse_when_all_errors_are_within_threshold() {
        let mut scoring = TruncatedQuadraticScoring::new(1.0);
        let errors = [0.1, -0.2, 0.3, -0.9];
        let cost = scoring.evaluate(&ResidualEstimator, &(), &errors);
        let sse: f64 = errors.iter().map(|e| e * e).sum();
        assert_relative_eq!(cost, sse, epsilon = 1e-15);
    }

    #[test]
    fn outliers_are_capped_at_threshold_squared() {
        let mut scoring = TruncatedQuadraticScoring::new(2.0);
        let errors = [0.0, 1.0, -3.0, 1e9, f64::NAN];
        let cost = scoring.evaluate(&ResidualEstimator, &(), &errors);
        assert_relative_eq!(cost, 0.0 + 1.0 + 4.0 + 4.0 + 4.0);
    }

    #[test]
    fn cost_is_bounded_by_n_threshold_squared() {
        let mut scoring = TruncatedQuadraticScoring::new(0.7);
        let errors: Vec<f64> = (0..50).map(|i| (i as f64 - 25.0) * 0.13).collect();
        let cost = scoring.evaluate(&ResidualEstimator, &(), &errors);
        assert!(cost >= 0.0);
        assert!(cost <= errors.len() as f64 * 0.49 + 1e-12);
    }
}
