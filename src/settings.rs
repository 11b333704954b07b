//! Search configuration.
//!
//! A single plain settings struct with documented defaults, plus the enum that
//! selects the scoring strategy at runtime.

use crate::error::{RansacError, Result};

/// Scoring strategy used to evaluate candidate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringType {
    /// Classic RANSAC: number of points whose error exceeds the threshold.
    #[default]
    ConsensusCount,
    /// LMedS: median absolute error.
    LeastMedian,
    /// MSAC: truncated quadratic loss.
    TruncatedQuadratic,
    /// MLESAC: EM-fitted mixture negative log-likelihood.
    EmLikelihood,
}

/// Main configuration object for a [`Ransac`](crate::core::Ransac) engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RansacSettings {
    /// Number of sample-estimate-score rounds.
    pub max_iterations: usize,
    /// Inlier distance threshold, in the estimator's error units.
    pub inlier_threshold: f64,
    pub scoring: ScoringType,
    /// EM rounds used by [`ScoringType::EmLikelihood`].
    pub em_iterations: usize,
    /// Ratio between the inlier threshold and the inlier noise sigma
    /// (1.96 puts the threshold at the 95% two-sided quantile).
    pub sigma_scale: f64,
    /// Seed for the sampler RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Refit the best model on its consensus set once the loop is done.
    pub final_refinement: bool,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            inlier_threshold: 1.0,
            scoring: ScoringType::ConsensusCount,
            em_iterations: 5,
            sigma_scale: 1.96,
            seed: None,
            final_refinement: false,
        }
    }
}

impl RansacSettings {
    /// Settings with the given strategy and every other field at its default.
    pub fn with_scoring(scoring: ScoringType) -> Self {
        Self {
            scoring,
            ..Self::default()
        }
    }

    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be at least 1"));
        }
        if !self.inlier_threshold.is_finite() || self.inlier_threshold <= 0.0 {
            return Err(invalid(
                "inlier_threshold",
                format!("must be finite and positive, got {}", self.inlier_threshold),
            ));
        }
        if self.scoring == ScoringType::EmLikelihood {
            if self.em_iterations == 0 {
                return Err(invalid("em_iterations", "must be at least 1"));
            }
            if !self.sigma_scale.is_finite() || self.sigma_scale <= 0.0 {
                return Err(invalid(
                    "sigma_scale",
                    format!("must be finite and positive, got {}", self.sigma_scale),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> RansacError {
    RansacError::InvalidSetting {
        name,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_documented_defaults() {
        let cfg = RansacSettings::default();
        assert_eq!(cfg.max_iterations, 100);
        assert!((cfg.inlier_threshold - 1.0).abs() < 1e-12);
        assert_eq!(cfg.scoring, ScoringType::ConsensusCount);
        assert_eq!(cfg.em_iterations, 5);
        assert!((cfg.sigma_scale - 1.96).abs() < 1e-12);
        assert_eq!(cfg.seed, None);
        assert!(!cfg.final_refinement);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_threshold_and_iterations() {
        let mut cfg = RansacSettings::default();
        cfg.inlier_threshold = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(RansacError::InvalidSetting {
                name: "inlier_threshold",
                ..
            })
        ));

        cfg.inlier_threshold = f64::NAN;
        assert!(cfg.validate().is_err());

        let cfg = RansacSettings {
            max_iterations: 0,
            ..RansacSettings::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(RansacError::InvalidSetting {
                name: "max_iterations",
                ..
            })
        ));
    }

    #[test]
    fn em_parameters_only_checked_for_em_scoring() {
        let mut cfg = RansacSettings {
            em_iterations: 0,
            sigma_scale: -1.0,
            ..RansacSettings::default()
        };
        assert!(cfg.validate().is_ok());

        cfg.scoring = ScoringType::EmLikelihood;
        assert!(matches!(
            cfg.validate(),
            Err(RansacError::InvalidSetting {
                name: "em_iterations",
                ..
            })
        ));

        cfg.em_iterations = 5;
        assert!(matches!(
            cfg.validate(),
            Err(RansacError::InvalidSetting {
                name: "sigma_scale",
                ..
            })
        ));
    }
}
