//! Built-in estimators.
//!
//! - 2D line fitting from point observations
//! - Robust mean of scalar observations
//!
//! Other models plug in by implementing [`Estimator`](crate::core::Estimator).

pub mod line;
pub mod mean;

pub use line::LineEstimator;
pub use mean::MeanEstimator;
