//! Runtime wrapper exposing the built-in scoring strategies through one enum,
//! so the engine type stays the same whichever strategy the settings select.

use crate::core::{Estimator, Scoring};
use crate::error::Result;
use crate::scoring::{
    ConsensusCountScoring, EmLikelihoodScoring, LeastMedianScoring, TruncatedQuadraticScoring,
};
use crate::settings::{RansacSettings, ScoringType};
use crate::types::Cost;

/// Runtime scoring selection.
#[derive(Debug, Clone)]
pub enum ScoringChoice {
    ConsensusCount(ConsensusCountScoring),
    LeastMedian(LeastMedianScoring),
    TruncatedQuadratic(TruncatedQuadraticScoring),
    EmLikelihood(EmLikelihoodScoring),
}

impl ScoringChoice {
    /// Build the strategy named by `settings.scoring` from the shared
    /// threshold and EM parameters.
    ///
    /// Fails only when the EM strategy is selected with unusable parameters.
    pub fn from_settings(settings: &RansacSettings) -> Result<Self> {
        let threshold = settings.inlier_threshold;
        Ok(match settings.scoring {
            ScoringType::ConsensusCount => {
                ScoringChoice::ConsensusCount(ConsensusCountScoring::new(threshold))
            }
            ScoringType::LeastMedian => ScoringChoice::LeastMedian(LeastMedianScoring::new()),
            ScoringType::TruncatedQuadratic => {
                ScoringChoice::TruncatedQuadratic(TruncatedQuadraticScoring::new(threshold))
            }
            ScoringType::EmLikelihood => ScoringChoice::EmLikelihood(EmLikelihoodScoring::new(
                threshold,
                settings.sigma_scale,
                settings.em_iterations,
            )?),
        })
    }

    pub fn scoring_type(&self) -> ScoringType {
        match self {
            ScoringChoice::ConsensusCount(_) => ScoringType::ConsensusCount,
            ScoringChoice::LeastMedian(_) => ScoringType::LeastMedian,
            ScoringChoice::TruncatedQuadratic(_) => ScoringType::TruncatedQuadratic,
            ScoringChoice::EmLikelihood(_) => ScoringType::EmLikelihood,
        }
    }
}

impl<E: Estimator> Scoring<E> for ScoringChoice {
    fn setup(&mut self, data: &[E::Datum]) {
        match self {
            ScoringChoice::ConsensusCount(s) => Scoring::<E>::setup(s, data),
            ScoringChoice::LeastMedian(s) => Scoring::<E>::setup(s, data),
            ScoringChoice::TruncatedQuadratic(s) => Scoring::<E>::setup(s, data),
            ScoringChoice::EmLikelihood(s) => Scoring::<E>::setup(s, data),
        }
    }

    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost {
        match self {
            ScoringChoice::ConsensusCount(s) => s.evaluate(estimator, model, data),
            ScoringChoice::LeastMedian(s) => s.evaluate(estimator, model, data),
            ScoringChoice::TruncatedQuadratic(s) => s.evaluate(estimator, model, data),
            ScoringChoice::EmLikelihood(s) => s.evaluate(estimator, model, data),
        }
    }

    fn teardown(&mut self) {
        match self {
            ScoringChoice::ConsensusCount(s) => Scoring::<E>::teardown(s),
            ScoringChoice::LeastMedian(s) => Scoring::<E>::teardown(s),
            ScoringChoice::TruncatedQuadratic(s) => Scoring::<E>::teardown(s),
            ScoringChoice::EmLikelihood(s) => Scoring::<E>::teardown(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoringChoice;
    use crate::error::RansacError;
    use crate::settings::{RansacSettings, ScoringType};

    #[test]
    fn settings_select_the_matching_strategy() {
        for kind in [
            ScoringType::ConsensusCount,
            ScoringType::LeastMedian,
            ScoringType::TruncatedQuadratic,
            ScoringType::EmLikelihood,
        ] {
            let choice =
                ScoringChoice::from_settings(&RansacSettings::with_scoring(kind)).unwrap();
            assert_eq!(choice.scoring_type(), kind);
        }
    }

    #[test]
    fn em_strategy_receives_em_parameters() {
        let settings = RansacSettings {
            scoring: ScoringType::EmLikelihood,
            inlier_threshold: 2.0,
            sigma_scale: 4.0,
            em_iterations: 9,
            ..RansacSettings::default()
        };
        let Ok(ScoringChoice::EmLikelihood(em)) = ScoringChoice::from_settings(&settings) else {
            panic!("expected EM scoring");
        };
        assert_eq!(em.threshold(), 2.0);
        assert_eq!(em.em_iterations(), 9);
        assert!((em.sigma2() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn em_strategy_rejects_zero_sigma_scale() {
        let settings = RansacSettings {
            sigma_scale: 0.0,
            ..RansacSettings::with_scoring(ScoringType::EmLikelihood)
        };
        assert!(matches!(
            ScoringChoice::from_settings(&settings),
            Err(RansacError::InvalidSetting { name: "sigma_scale", .. })
        ));

        // Non-EM strategies ignore the EM parameters.
        let settings = RansacSettings {
            scoring: ScoringType::TruncatedQuadratic,
            ..settings
        };
        assert!(ScoringChoice::from_settings(&settings).is_ok());
    }
}
