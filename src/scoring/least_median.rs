//! Least-median-of-squares (LMedS) scoring.

use crate::core::{Estimator, Scoring};
use crate::types::Cost;

/// Cost = median absolute error over all `N` points.
///
/// Needs no threshold and tolerates up to roughly half of the data being
/// outliers. For even `N` the upper median (element `N / 2` in sorted order)
/// is used.
#[derive(Debug, Clone, Default)]
pub struct LeastMedianScoring {
    errors: Vec<f64>,
}

impl LeastMedianScoring {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Median of `|e|` by selection; element `len / 2` of the sorted magnitudes.
///
/// Reorders `errors` in place. Returns `f64::INFINITY` for an empty slice.
pub fn median_abs(errors: &mut [f64]) -> f64 {
    if errors.is_empty() {
        return f64::INFINITY;
    }
    for e in errors.iter_mut() {
        *e = e.abs();
    }
    let mid = errors.len() / 2;
    let (_, median, _) = errors.select_nth_unstable_by(mid, f64::total_cmp);
    *median
}

impl<E: Estimator> Scoring<E> for LeastMedianScoring {
    fn setup(&mut self, data: &[E::Datum]) {
        self.errors = Vec::with_capacity(data.len());
    }

    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
        self.errors.clear();
        self.errors
            .extend(data.iter().map(|datum| estimator.compute_error(model, datum)));
        median_abs(&mut self.errors)
    }

    fn teardown(&mut self) {
        self.errors = Vec::new();
    }
}
