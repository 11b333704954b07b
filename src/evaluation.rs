//! Ground-truth evaluation of search results.
//!
//! Given the true model and the true inlier set of a synthetic dataset, the
//! evaluator measures how close a candidate model gets to the truth (as a
//! normalized sum of squared errors) and how well a candidate inlier set
//! matches the true one (as a confusion matrix). [`Stopwatch`] times a
//! search for reporting.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::core::Estimator;
use crate::error::{RansacError, Result};

/// Confusion matrix of a candidate inlier set against the true one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionScore {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionScore {
    /// `tp / (tp + fp)`, or `None` when nothing was flagged.
    pub fn precision(&self) -> Option<f64> {
        let flagged = self.true_positives + self.false_positives;
        (flagged > 0).then(|| self.true_positives as f64 / flagged as f64)
    }

    /// `tp / (tp + fn)`, or `None` when there are no true inliers.
    pub fn recall(&self) -> Option<f64> {
        let actual = self.true_positives + self.false_negatives;
        (actual > 0).then(|| self.true_positives as f64 / actual as f64)
    }
}

/// Scores candidate models and inlier sets against a known ground truth.
pub struct GroundTruthEvaluator<'a, E: Estimator> {
    estimator: &'a E,
    data: &'a [E::Datum],
    true_model: E::Model,
    true_inliers: HashSet<usize>,
    true_sse: f64,
}

impl<'a, E: Estimator> GroundTruthEvaluator<'a, E> {
    pub fn new(
        estimator: &'a E,
        data: &'a [E::Datum],
        true_model: E::Model,
        true_inliers: &[usize],
    ) -> Result<Self> {
        if let Some(&index) = true_inliers.iter().find(|&&i| i >= data.len()) {
            return Err(RansacError::IndexOutOfBounds {
                index,
                len: data.len(),
            });
        }
        let true_inliers: HashSet<usize> = true_inliers.iter().copied().collect();
        let mut evaluator = Self {
            estimator,
            data,
            true_model,
            true_inliers,
            true_sse: 0.0,
        };
        evaluator.true_sse = evaluator.sse(&evaluator.true_model);
        Ok(evaluator)
    }

    pub fn true_model(&self) -> &E::Model {
        &self.true_model
    }

    /// Sum of squared errors of the true model over the true inliers.
    pub fn true_sse(&self) -> f64 {
        self.true_sse
    }

    /// `SSE(model) / SSE(truth)` over the true inliers.
    ///
    /// A value near 1 means the candidate explains the inliers as well as the
    /// truth does. `None` when the true SSE is zero (noise-free data).
    pub fn evaluate_model(&self, model: &E::Model) -> Option<f64> {
        (self.true_sse > 0.0).then(|| self.sse(model) / self.true_sse)
    }

    /// Compare a candidate inlier index set with the true inliers.
    ///
    /// Duplicate or out-of-range candidate indices are ignored.
    pub fn evaluate_inliers(&self, inliers: &[usize]) -> ConfusionScore {
        let candidates: HashSet<usize> = inliers
            .iter()
            .copied()
            .filter(|&i| i < self.data.len())
            .collect();
        let true_positives = candidates.intersection(&self.true_inliers).count();
        let false_positives = candidates.len() - true_positives;
        let false_negatives = self.true_inliers.len() - true_positives;
        let true_negatives = self.data.len() - self.true_inliers.len() - false_positives;
        ConfusionScore {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
        }
    }

    fn sse(&self, model: &E::Model) -> f64 {
        self.true_inliers
            .iter()
            .map(|&i| {
                let e = self.estimator.compute_error(model, &self.data[i]);
                e * e
            })
            .sum()
    }
}

/// Wall-clock timer.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart from now.
    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
