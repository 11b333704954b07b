//! Shared type aliases.
//!
//! The engine itself is generic over the datum type; these aliases only name
//! the concrete types used by the built-in estimators and helpers.

use nalgebra::Point2;

/// A 2D observation, used by the line estimator and the synthetic generator.
pub type Point = Point2<f64>;

/// Aggregate cost of a model over a dataset. Lower is better; `f64::INFINITY`
/// means "no model".
pub type Cost = f64;
