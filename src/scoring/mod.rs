//! Built-in scoring strategies.
//!
//! Each strategy maps the per-datum errors of a candidate model to one
//! aggregate cost (lower is better) and plugs into the engine through the
//! [`Scoring`](crate::core::Scoring) trait:
//!
//! | strategy | cost |
//! |---|---|
//! | [`ConsensusCountScoring`] | number of points with `\|e\| > t` |
//! | [`LeastMedianScoring`] | median of `\|e\|` |
//! | [`TruncatedQuadraticScoring`] | `Σ min(e², t²)` |
//! | [`EmLikelihoodScoring`] | negative log-likelihood of a Gaussian/uniform mixture |

pub mod consensus;
pub mod em_likelihood;
pub mod least_median;
pub mod truncated;

pub use consensus::ConsensusCountScoring;
pub use em_likelihood::EmLikelihoodScoring;
pub use least_median::{median_abs, LeastMedianScoring};
pub use truncated::TruncatedQuadraticScoring;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::Estimator;

    /// Treats each datum as its own error: `compute_error(_, e) == e`.
    pub struct ResidualEstimator;

    impl Estimator for ResidualEstimator {
        type Datum = f64;
        type Model = ();

        fn sample_size(&self) -> usize {
            1
        }

        fn compute_models(&self, _data: &[f64], _sample: &[usize]) -> Vec<()> {
            vec![()]
        }

        fn compute_error(&self, _model: &(), datum: &f64) -> f64 {
            *datum
        }
    }
}
