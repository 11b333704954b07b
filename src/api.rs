//! High-level convenience functions.
//!
//! Each call builds a one-shot [`Ransac`] engine from `settings`, runs the
//! search and collects the inliers of the winning model in one result.
//!
//! # Examples
//!
//! ```rust
//! use rtl::{estimate_mean, RansacSettings};
//!
//! let values = [2.9, 3.0, 3.1, 100.0, 3.0];
//! let settings = RansacSettings {
//!     seed: Some(7),
//!     final_refinement: true,
//!     ..RansacSettings::default()
//! };
//! let result = estimate_mean(&values, settings).unwrap().unwrap();
//! assert!(!result.inliers.contains(&3));
//! ```

use crate::core::{Estimator, Ransac};
use crate::error::Result;
use crate::estimators::{LineEstimator, MeanEstimator};
use crate::models::Line;
use crate::settings::RansacSettings;
use crate::types::{Cost, Point};

/// Result of a high-level estimation call.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult<M> {
    /// The estimated model.
    pub model: M,
    /// Indices of inlier points, `|error| < settings.inlier_threshold`.
    pub inliers: Vec<usize>,
    /// Cost of the estimated model under the selected strategy.
    pub cost: Cost,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Run a full search with any estimator.
///
/// Returns `Ok(None)` when every sample was degenerate.
pub fn estimate<E: Estimator>(
    estimator: &E,
    data: &[E::Datum],
    settings: RansacSettings,
) -> Result<Option<EstimationResult<E::Model>>> {
    let threshold = settings.inlier_threshold;
    let mut ransac = Ransac::new(estimator, settings)?;
    let best = ransac.find_best(data)?;
    Ok(best.model.map(|model| EstimationResult {
        inliers: ransac.find_inliers(&model, data, threshold),
        model,
        cost: best.cost,
        iterations: best.iterations,
    }))
}

/// Estimate a 2D line from point observations.
pub fn estimate_line(
    points: &[Point],
    settings: RansacSettings,
) -> Result<Option<EstimationResult<Line>>> {
    estimate(&LineEstimator::new(), points, settings)
}

/// Estimate the mean of scalar observations, ignoring outliers.
pub fn estimate_mean(
    values: &[f64],
    settings: RansacSettings,
) -> Result<Option<EstimationResult<f64>>> {
    estimate(&MeanEstimator::new(), values, settings)
}
