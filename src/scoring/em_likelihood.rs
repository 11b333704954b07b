//! MLESAC-style maximum-likelihood scoring.
//!
//! Errors are modelled as a mixture of a zero-mean Gaussian (inliers) and a
//! uniform distribution over the observed range of the signed errors
//! (outliers):
//!
//! ```text
//! p(e) = γ · N(e; 0, σ²) + (1 − γ) / ν
//! ```
//!
//! with `σ = threshold / sigma_scale`. The mixing weight `γ` is re-estimated
//! for every candidate model by a fixed number of EM rounds starting at 0.5,
//! and the cost is the negative log-likelihood `−Σ ln p(e_i)`.

use std::f64::consts::PI;

use crate::core::{Estimator, Scoring};
use crate::error::{RansacError, Result};
use crate::types::Cost;

const INITIAL_INLIER_RATIO: f64 = 0.5;

/// EM-fitted mixture negative log-likelihood.
#[derive(Debug, Clone)]
pub struct EmLikelihoodScoring {
    threshold: f64,
    sigma_scale: f64,
    em_iterations: usize,
    sigma2: f64,
    squared_errors: Vec<f64>,
    last_inlier_ratio: Option<f64>,
}

impl EmLikelihoodScoring {
    /// Fails unless `threshold` and `sigma_scale` are finite and positive and
    /// at least one EM round is requested.
    pub fn new(threshold: f64, sigma_scale: f64, em_iterations: usize) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(RansacError::InvalidSetting {
                name: "inlier_threshold",
                reason: format!("must be finite and positive, got {threshold}"),
            });
        }
        if em_iterations == 0 {
            return Err(RansacError::InvalidSetting {
                name: "em_iterations",
                reason: "must be at least 1".into(),
            });
        }
        if !sigma_scale.is_finite() || sigma_scale <= 0.0 {
            return Err(RansacError::InvalidSetting {
                name: "sigma_scale",
                reason: format!("must be finite and positive, got {sigma_scale}"),
            });
        }
        Ok(Self {
            threshold,
            sigma_scale,
            em_iterations,
            sigma2: inlier_variance(threshold, sigma_scale),
            squared_errors: Vec::new(),
            last_inlier_ratio: None,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn sigma_scale(&self) -> f64 {
        self.sigma_scale
    }

    pub fn em_iterations(&self) -> usize {
        self.em_iterations
    }

    /// Inlier variance `σ²`.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Converged mixing weight `γ` of the most recently evaluated model.
    pub fn last_inlier_ratio(&self) -> Option<f64> {
        self.last_inlier_ratio
    }

    /// Width of the uniform outlier component.
    ///
    /// The observed range of the signed errors, but never narrower than the
    /// inlier band `[-t, t]`, which also keeps a zero range from dividing by
    /// zero.
    fn outlier_span(&self, min_error: f64, max_error: f64) -> f64 {
        (max_error - min_error).max(2.0 * self.threshold)
    }
}

fn inlier_variance(threshold: f64, sigma_scale: f64) -> f64 {
    let sigma = threshold / sigma_scale;
    sigma * sigma
}

/// Mixture components evaluated for one value of `γ`.
struct Mixture {
    inlier_coeff: f64,
    outlier_density: f64,
    inv_two_sigma2: f64,
}

impl Mixture {
    fn new(gamma: f64, nu: f64, sigma2: f64) -> Self {
        Self {
            inlier_coeff: gamma / (2.0 * PI * sigma2).sqrt(),
            outlier_density: (1.0 - gamma) / nu,
            inv_two_sigma2: 0.5 / sigma2,
        }
    }

    fn inlier_density(&self, error2: f64) -> f64 {
        self.inlier_coeff * (-error2 * self.inv_two_sigma2).exp()
    }

    fn inlier_posterior(&self, error2: f64) -> f64 {
        let p_in = self.inlier_density(error2);
        let total = p_in + self.outlier_density;
        if total > 0.0 {
            p_in / total
        } else {
            0.0
        }
    }
}

/// Run `iterations` EM rounds from `γ = 0.5` and return the final `γ`.
pub fn estimate_inlier_ratio(squared_errors: &[f64], nu: f64, sigma2: f64, iterations: usize) -> f64 {
    if squared_errors.is_empty() {
        return INITIAL_INLIER_RATIO;
    }
    let n = squared_errors.len() as f64;
    (0..iterations).fold(INITIAL_INLIER_RATIO, |gamma, _| {
        let mixture = Mixture::new(gamma, nu, sigma2);
        squared_errors
            .iter()
            .map(|&e2| mixture.inlier_posterior(e2))
            .sum::<f64>()
            / n
    })
}

/// `−Σ ln(γ·N(e_i) + (1−γ)/ν)`.
pub fn negative_log_likelihood(squared_errors: &[f64], nu: f64, sigma2: f64, gamma: f64) -> f64 {
    let mixture = Mixture::new(gamma, nu, sigma2);
    -squared_errors
        .iter()
        .map(|&e2| (mixture.inlier_density(e2) + mixture.outlier_density).ln())
        .sum::<f64>()
}

impl<E: Estimator> Scoring<E> for EmLikelihoodScoring {
    fn setup(&mut self, data: &[E::Datum]) {
        self.sigma2 = inlier_variance(self.threshold, self.sigma_scale);
        self.squared_errors = Vec::with_capacity(data.len());
        self.last_inlier_ratio = None;
    }

    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
        self.squared_errors.clear();
        let mut min_error = f64::INFINITY;
        let mut max_error = f64::NEG_INFINITY;
        for datum in data {
            let e = estimator.compute_error(model, datum);
            min_error = min_error.min(e);
            max_error = max_error.max(e);
            self.squared_errors.push(e * e);
        }

        let nu = self.outlier_span(min_error, max_error);
        let gamma = estimate_inlier_ratio(&self.squared_errors, nu, self.sigma2, self.em_iterations);
        self.last_inlier_ratio = Some(gamma);
        negative_log_likelihood(&self.squared_errors, nu, self.sigma2, gamma)
    }

    fn teardown(&mut self) {
        self.squared_errors = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::ResidualEstimator;
    use approx::assert_relative_eq;

    fn setup(scoring: &mut EmLikelihoodScoring, data: &[f64]) {
        <EmLikelihoodScoring as Scoring<ResidualEstimator>>::setup(scoring, data);
    }

    fn teardown(scoring: &mut EmLikelihoodScoring) {
        <EmLikelihoodScoring as Scoring<ResidualEstimator>>::teardown(scoring);
    }

    #[test]
    fn sigma_follows_threshold_and_scale() {
        let scoring = EmLikelihoodScoring::new(1.96, 1.96, 5).unwrap();
        assert_relative_eq!(scoring.sigma2(), 1.0);
        let scoring = EmLikelihoodScoring::new(1.0, 2.0, 5).unwrap();
        assert_relative_eq!(scoring.sigma2(), 0.25);
    }

    #[test]
    fn single_em_round_matches_hand_computation() {
        let sigma2 = 0.25;
        let nu = 4.0;
        let errors2 = [0.0, 1.0];
        let coeff = 0.5 / (2.0 * PI * sigma2).sqrt();
        let p_out = 0.5 / nu;
        let post0 = coeff / (coeff + p_out);
        let p1 = coeff * (-2.0_f64).exp();
        let post1 = p1 / (p1 + p_out);
        let gamma = estimate_inlier_ratio(&errors2, nu, sigma2, 1);
        assert_relative_eq!(gamma, 0.5 * (post0 + post1), epsilon = 1e-15);
    }

    #[test]
    fn inlier_only_data_drives_gamma_towards_one() {
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let errors: Vec<f64> = (0..100).map(|i| ((i as f64) * 0.37).sin() * 1e-3).collect();
        setup(&mut scoring, &errors);
        scoring.evaluate(&ResidualEstimator, &(), &errors);
        let gamma = scoring.last_inlier_ratio().unwrap();
        assert!(gamma > 0.85, "gamma = {gamma}");

        let mut long = EmLikelihoodScoring::new(1.0, 1.96, 50).unwrap();
        setup(&mut long, &errors);
        long.evaluate(&ResidualEstimator, &(), &errors);
        let converged = long.last_inlier_ratio().unwrap();
        assert!(converged > 0.99, "gamma = {converged}");
        assert!(converged > gamma);
    }

    #[test]
    fn outlier_only_data_drives_gamma_towards_zero() {
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let errors: Vec<f64> = (0..100).map(|i| 5.0 + (i as f64) * 4.7).collect();
        setup(&mut scoring, &errors);
        scoring.evaluate(&ResidualEstimator, &(), &errors);
        let gamma = scoring.last_inlier_ratio().unwrap();
        assert!(gamma < 0.05, "gamma = {gamma}");
    }

    #[test]
    fn better_fit_has_lower_cost() {
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let mut good: Vec<f64> = (0..80).map(|i| ((i as f64) * 0.91).cos() * 0.2).collect();
        good.extend((0..20).map(|i| 30.0 + i as f64 * 7.0));
        let bad: Vec<f64> = good.iter().map(|e| e + 0.8).collect();

        setup(&mut scoring, &good);
        let good_cost = scoring.evaluate(&ResidualEstimator, &(), &good);
        let bad_cost = scoring.evaluate(&ResidualEstimator, &(), &bad);
        teardown(&mut scoring);
        assert!(good_cost < bad_cost, "{good_cost} vs {bad_cost}");
    }

    #[test]
    fn zero_error_range_stays_finite() {
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let errors = vec![0.0; 10];
        setup(&mut scoring, &errors);
        let cost = scoring.evaluate(&ResidualEstimator, &(), &errors);
        assert!(cost.is_finite());
        assert!(scoring.last_inlier_ratio().unwrap() > 0.5);
    }

    #[test]
    fn outlier_span_covers_the_signed_error_range() {
        // Symmetric residuals -10, -9.5, ..., 10 span 20, not 10.
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let errors: Vec<f64> = (0..41).map(|i| -10.0 + 0.5 * i as f64).collect();
        setup(&mut scoring, &errors);
        let cost = scoring.evaluate(&ResidualEstimator, &(), &errors);

        let squared: Vec<f64> = errors.iter().map(|e| e * e).collect();
        let sigma2 = scoring.sigma2();
        let gamma = estimate_inlier_ratio(&squared, 20.0, sigma2, 5);
        assert_relative_eq!(scoring.last_inlier_ratio().unwrap(), gamma, epsilon = 1e-15);
        assert_relative_eq!(gamma, 0.020173454558866693, epsilon = 1e-12);
        assert_relative_eq!(cost, 122.9171530859579, epsilon = 1e-9);
    }

    #[test]
    fn constructor_rejects_unusable_parameters() {
        assert!(matches!(
            EmLikelihoodScoring::new(1.0, 0.0, 5),
            Err(RansacError::InvalidSetting { name: "sigma_scale", .. })
        ));
        assert!(matches!(
            EmLikelihoodScoring::new(1.0, f64::NAN, 5),
            Err(RansacError::InvalidSetting { name: "sigma_scale", .. })
        ));
        assert!(matches!(
            EmLikelihoodScoring::new(1.0, 1.96, 0),
            Err(RansacError::InvalidSetting { name: "em_iterations", .. })
        ));
        assert!(matches!(
            EmLikelihoodScoring::new(-1.0, 1.96, 5),
            Err(RansacError::InvalidSetting { name: "inlier_threshold", .. })
        ));
    }

    #[test]
    fn scratch_buffer_lives_between_setup_and_teardown() {
        let mut scoring = EmLikelihoodScoring::new(1.0, 1.96, 5).unwrap();
        let errors = vec![0.5; 32];
        setup(&mut scoring, &errors);
        assert!(scoring.squared_errors.capacity() >= 32);
        scoring.evaluate(&ResidualEstimator, &(), &errors);
        assert_eq!(scoring.squared_errors.len(), 32);
        teardown(&mut scoring);
        assert_eq!(scoring.squared_errors.capacity(), 0);
    }
}
