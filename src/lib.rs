//! # rtl - Generic Robust Estimation
//!
//! `rtl` searches for the model that best explains the uncontaminated part of
//! a dataset without knowing in advance which points are outliers. The engine
//! is model-agnostic: it only talks to an [`Estimator`] (minimal-sample solver
//! plus per-datum error) and a [`Scoring`] strategy.
//!
//! ## Quick Start
//!
//! The easiest way to use `rtl` is through the high-level API functions:
//!
//! ```rust
//! use rtl::{estimate_line, Point, RansacSettings};
//!
//! let mut points: Vec<Point> = (0..20)
//!     .map(|i| Point::new(i as f64, 0.5 * i as f64 + 2.0))
//!     .collect();
//! points.push(Point::new(3.0, 40.0));
//!
//! let settings = RansacSettings { seed: Some(42), ..RansacSettings::default() };
//! let result = estimate_line(&points, settings).unwrap().unwrap();
//! assert_eq!(result.inliers.len(), 20);
//! ```
//!
//! ## Scoring strategies
//!
//! | [`ScoringType`] | cost of a model |
//! |---|---|
//! | `ConsensusCount` | number of points with `\|e\| > t` (RANSAC) |
//! | `LeastMedian` | median `\|e\|` (LMedS) |
//! | `TruncatedQuadratic` | `Σ min(e², t²)` (MSAC) |
//! | `EmLikelihood` | EM-fitted mixture negative log-likelihood (MLESAC) |
//!
//! ## Extending the Library
//!
//! ### Core Extension Traits
//!
//! - **[`Estimator`](core::Estimator)**: Implement this to fit new kinds of models
//! - **[`Sampler`](core::Sampler)**: Implement this to create custom sampling strategies
//! - **[`Scoring<E>`](core::Scoring)**: Implement this to define custom cost functions
//! - **[`TerminationCriterion<M>`](core::TerminationCriterion)**: Implement this for custom stopping rules
//!
//! ### Example: Custom Estimator
//!
//! ```rust
//! use rtl::core::{Estimator, Ransac};
//! use rtl::RansacSettings;
//!
//! /// Fits `y = k·x` through the origin.
//! struct Proportional;
//!
//! impl Estimator for Proportional {
//!     type Datum = (f64, f64);
//!     type Model = f64;
//!
//!     fn sample_size(&self) -> usize {
//!         1
//!     }
//!
//!     fn compute_models(&self, data: &[(f64, f64)], sample: &[usize]) -> Vec<f64> {
//!         let (x, y) = data[sample[0]];
//!         if x == 0.0 { Vec::new() } else { vec![y / x] }
//!     }
//!
//!     fn compute_error(&self, k: &f64, &(x, y): &(f64, f64)) -> f64 {
//!         y - k * x
//!     }
//! }
//!
//! let data = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, -9.0)];
//! let settings = RansacSettings { seed: Some(1), ..RansacSettings::default() };
//! let mut ransac = Ransac::new(&Proportional, settings).unwrap();
//! let best = ransac.find_best(&data).unwrap();
//! assert_eq!(best.model, Some(2.0));
//! ```
//!
//! ### Example: Custom Scoring
//!
//! ```rust
//! use rtl::core::{Estimator, Ransac, Scoring};
//! use rtl::estimators::MeanEstimator;
//! use rtl::types::Cost;
//! use rtl::RansacSettings;
//!
//! /// Sum of absolute errors.
//! struct L1;
//!
//! impl<E: Estimator> Scoring<E> for L1 {
//!     fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
//!         data.iter().map(|d| estimator.compute_error(model, d).abs()).sum()
//!     }
//! }
//!
//! let estimator = MeanEstimator::new();
//! let mut ransac = Ransac::with_scoring(&estimator, RansacSettings::default(), L1).unwrap();
//! let best = ransac.find_best(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(best.model, Some(2.0));
//! ```
//!
//! ## Modules
//!
//! - **[`api`](api)**: High-level functions for common estimation tasks
//! - **[`core`](core)**: Core traits and the [`Ransac`] search engine
//! - **[`estimators`](estimators)**: Built-in estimators
//! - **[`samplers`](samplers)**: Built-in sampling strategies
//! - **[`scoring`](scoring)**: Built-in scoring strategies
//! - **[`models`](models)**: Model types
//! - **[`settings`](settings)**: Configuration types
//! - **[`synthetic`](synthetic)** and **[`evaluation`](evaluation)**: Benchmark data and ground-truth metrics

pub mod api;
pub mod choices;
pub mod core;
pub mod error;
pub mod estimators;
pub mod evaluation;
pub mod models;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod synthetic;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{estimate, estimate_line, estimate_mean, EstimationResult};

// Re-export core traits and the engine for easy access
pub use crate::core::{
    BestModel, Estimator, FixedIterations, InlierMask, Ransac, Sampler, Scoring, StopAtCost,
    TerminationCriterion,
};

pub use choices::ScoringChoice;
pub use error::{RansacError, Result};
pub use models::Line;
pub use settings::{RansacSettings, ScoringType};
pub use types::{Cost, Point};
