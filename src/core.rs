//! Core traits and the sampling-consensus search engine.
//!
//! The engine is split along the same seams as classic RANSAC variants:
//! - [`Estimator`]: builds candidate models from minimal samples and measures
//!   the error of a single datum against a model.
//! - [`Sampler`]: draws minimal samples of unique indices.
//! - [`Scoring`]: turns per-datum errors into an aggregate cost, with optional
//!   setup/teardown hooks around a search.
//! - [`TerminationCriterion`]: the loop continuation predicate and the
//!   best-model update hook.
//!
//! [`Ransac`] owns the sampler (and with it the RNG), the scoring strategy and
//! the termination criterion, and borrows the estimator.

use crate::choices::ScoringChoice;
use crate::error::{RansacError, Result};
use crate::samplers::UniformRandomSampler;
use crate::settings::RansacSettings;
use crate::types::Cost;

/// Estimator responsible for generating model hypotheses from minimal samples.
pub trait Estimator {
    /// Observation type.
    type Datum;
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Size of a minimal sample. Must be at least 1.
    fn sample_size(&self) -> usize;

    /// Estimate candidate models from the data at `sample`.
    ///
    /// Degenerate samples yield an empty vector. Some estimators produce
    /// several algebraic solutions per sample.
    fn compute_models(&self, data: &[Self::Datum], sample: &[usize]) -> Vec<Self::Model>;

    /// Error of `datum` under `model`; zero on a perfect fit. May be signed.
    fn compute_error(&self, model: &Self::Model, datum: &Self::Datum) -> f64;

    /// Fit a single model to an arbitrary (usually non-minimal) index set.
    ///
    /// Used by the optional final refinement. The default takes the first
    /// model [`compute_models`](Self::compute_models) returns, which is right
    /// for estimators whose minimal solver is also a least-squares fit.
    fn refine_model(&self, data: &[Self::Datum], indices: &[usize]) -> Option<Self::Model> {
        self.compute_models(data, indices).into_iter().next()
    }
}

/// Sampler responsible for drawing minimal samples from the data.
pub trait Sampler {
    /// Restrict subsequent samples to indices in `[0, n)`.
    fn reset(&mut self, n: usize);

    /// Restart the sampler's random stream.
    fn reseed(&mut self, seed: u64);

    /// Fill `out_indices` with unique indices.
    ///
    /// Returns `false` if a sample could not be drawn.
    fn sample(&mut self, out_indices: &mut [usize]) -> bool;
}

/// Scoring strategy used to compute the aggregate cost of a model.
pub trait Scoring<E: Estimator> {
    /// Called once before the search loop with the full dataset.
    fn setup(&mut self, _data: &[E::Datum]) {}

    /// Cost of `model` over the full dataset. Lower is better.
    fn evaluate(&mut self, estimator: &E, model: &E::Model, data: &[E::Datum]) -> Cost;

    /// Called exactly once after the search loop, however it ended.
    fn teardown(&mut self) {}
}

/// Loop control hooks.
pub trait TerminationCriterion<M> {
    /// Whether another round should run. `iteration` rounds have run so far.
    fn should_continue(&mut self, iteration: usize, max_iterations: usize) -> bool {
        iteration < max_iterations
    }

    /// Called whenever a model improves on the best cost.
    ///
    /// Returning `false` terminates the whole search immediately.
    fn accept_best(&mut self, _model: &M, _cost: Cost) -> bool {
        true
    }
}

/// Run exactly `max_iterations` rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIterations;

impl<M> TerminationCriterion<M> for FixedIterations {}

/// Stop as soon as a model reaches a cost at or below `target`.
#[derive(Debug, Clone, Copy)]
pub struct StopAtCost {
    pub target: Cost,
}

impl<M> TerminationCriterion<M> for StopAtCost {
    fn accept_best(&mut self, _model: &M, cost: Cost) -> bool {
        cost > self.target
    }
}

/// Outcome of [`Ransac::find_best`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestModel<M> {
    /// Best model found, or `None` if every sample was degenerate.
    pub model: Option<M>,
    /// Cost of `model`; `f64::INFINITY` when no model was found.
    pub cost: Cost,
    /// Number of rounds actually run.
    pub iterations: usize,
}

impl<M> BestModel<M> {
    pub fn is_found(&self) -> bool {
        self.model.is_some()
    }
}

/// Boolean inlier classification of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlierMask {
    pub mask: Vec<bool>,
    pub count: usize,
}

impl InlierMask {
    /// Indices flagged as inliers, in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &inlier)| inlier.then_some(i))
            .collect()
    }
}

/// Generic sampling-consensus search engine.
///
/// One engine binds one estimator (borrowed) and one scoring strategy. The
/// sampler's RNG persists across [`find_best`](Self::find_best) calls, so two
/// runs are only comparable after [`reseed`](Self::reseed) (or on two engines
/// built with the same [`RansacSettings::seed`]).
pub struct Ransac<'e, E, S = ScoringChoice, T = FixedIterations, Sa = UniformRandomSampler>
where
    E: Estimator,
    S: Scoring<E>,
    T: TerminationCriterion<E::Model>,
    Sa: Sampler,
{
    estimator: &'e E,
    settings: RansacSettings,
    scoring: S,
    termination: T,
    sampler: Sa,
}

impl<'e, E> Ransac<'e, E>
where
    E: Estimator,
{
    /// Build an engine whose strategy is selected by `settings.scoring`.
    pub fn new(estimator: &'e E, settings: RansacSettings) -> Result<Self> {
        if estimator.sample_size() == 0 {
            return Err(RansacError::ZeroSampleSize);
        }
        settings.validate()?;
        let scoring = ScoringChoice::from_settings(&settings)?;
        Self::with_scoring(estimator, settings, scoring)
    }
}

impl<'e, E, S> Ransac<'e, E, S>
where
    E: Estimator,
    S: Scoring<E>,
{
    /// Build an engine around a caller-supplied scoring strategy.
    ///
    /// `settings.scoring` is ignored; the remaining fields still apply.
    pub fn with_scoring(estimator: &'e E, settings: RansacSettings, scoring: S) -> Result<Self> {
        if estimator.sample_size() == 0 {
            return Err(RansacError::ZeroSampleSize);
        }
        settings.validate()?;
        let sampler = match settings.seed {
            Some(seed) => UniformRandomSampler::from_seed(seed),
            None => UniformRandomSampler::new(),
        };
        Ok(Self {
            estimator,
            settings,
            scoring,
            termination: FixedIterations,
            sampler,
        })
    }
}

impl<'e, E, S, T, Sa> Ransac<'e, E, S, T, Sa>
where
    E: Estimator,
    S: Scoring<E>,
    T: TerminationCriterion<E::Model>,
    Sa: Sampler,
{
    /// Replace the termination criterion.
    pub fn with_termination<T2>(self, termination: T2) -> Ransac<'e, E, S, T2, Sa>
    where
        T2: TerminationCriterion<E::Model>,
    {
        Ransac {
            estimator: self.estimator,
            settings: self.settings,
            scoring: self.scoring,
            termination,
            sampler: self.sampler,
        }
    }

    /// Replace the sampler.
    pub fn with_sampler<Sa2: Sampler>(self, sampler: Sa2) -> Ransac<'e, E, S, T, Sa2> {
        Ransac {
            estimator: self.estimator,
            settings: self.settings,
            scoring: self.scoring,
            termination: self.termination,
            sampler,
        }
    }

    pub fn settings(&self) -> &RansacSettings {
        &self.settings
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Restart the sampler RNG so the next search is reproducible.
    pub fn reseed(&mut self, seed: u64) {
        self.sampler.reseed(seed);
    }

    /// Run the full search over `data` and return the best model and its cost.
    ///
    /// Fails if `data` holds no more points than a minimal sample.
    pub fn find_best(&mut self, data: &[E::Datum]) -> Result<BestModel<E::Model>> {
        let n = data.len();
        let sample_size = self.estimator.sample_size();
        if n <= sample_size {
            return Err(RansacError::InsufficientData {
                len: n,
                sample_size,
            });
        }
        let max_iterations = self.settings.max_iterations;
        tracing::debug!(n, sample_size, max_iterations, "starting search");

        self.sampler.reset(n);
        self.scoring.setup(data);

        let mut sample = vec![0usize; sample_size];
        let mut best_model: Option<E::Model> = None;
        let mut best_cost = f64::INFINITY;
        let mut iteration = 0usize;

        'search: while self.termination.should_continue(iteration, max_iterations) {
            iteration += 1;

            if !self.sampler.sample(&mut sample) {
                tracing::trace!(iteration, "sampler could not draw a sample");
                continue;
            }

            let models = self.estimator.compute_models(data, &sample);
            if models.is_empty() {
                tracing::trace!(iteration, ?sample, "degenerate sample skipped");
                continue;
            }

            for model in models {
                let cost = self.scoring.evaluate(self.estimator, &model, data);
                if cost < best_cost {
                    tracing::trace!(iteration, cost, "new best model");
                    best_cost = cost;
                    let keep_going = self.termination.accept_best(&model, cost);
                    best_model = Some(model);
                    if !keep_going {
                        tracing::debug!(iteration, cost, "search terminated early");
                        break 'search;
                    }
                }
            }
        }

        if self.settings.final_refinement {
            if let Some((refined, cost)) = best_model
                .as_ref()
                .and_then(|model| self.refine(model, data))
            {
                if cost <= best_cost {
                    tracing::trace!(before = best_cost, after = cost, "refined best model");
                    best_model = Some(refined);
                    best_cost = cost;
                }
            }
        }

        self.scoring.teardown();

        if best_model.is_none() {
            tracing::warn!(iterations = iteration, "search finished without a model");
        } else {
            tracing::debug!(iterations = iteration, cost = best_cost, "search finished");
        }

        Ok(BestModel {
            model: best_model,
            cost: best_cost,
            iterations: iteration,
        })
    }

    /// Indices of every datum with `|error| < threshold`.
    pub fn find_inliers(&self, model: &E::Model, data: &[E::Datum], threshold: f64) -> Vec<usize> {
        data.iter()
            .enumerate()
            .filter(|(_, datum)| self.is_inlier(model, datum, threshold))
            .map(|(i, _)| i)
            .collect()
    }

    /// Inlier mask of length `data.len()` together with the inlier count.
    pub fn find_inlier_mask(&self, model: &E::Model, data: &[E::Datum], threshold: f64) -> InlierMask {
        let mask: Vec<bool> = data
            .iter()
            .map(|datum| self.is_inlier(model, datum, threshold))
            .collect();
        let count = mask.iter().filter(|&&inlier| inlier).count();
        InlierMask { mask, count }
    }

    fn is_inlier(&self, model: &E::Model, datum: &E::Datum, threshold: f64) -> bool {
        self.estimator.compute_error(model, datum).abs() < threshold
    }

    fn refine(&mut self, model: &E::Model, data: &[E::Datum]) -> Option<(E::Model, Cost)> {
        let inliers = self.find_inliers(model, data, self.settings.inlier_threshold);
        if inliers.len() < self.estimator.sample_size() {
            return None;
        }
        let refined = self.estimator.refine_model(data, &inliers)?;
        let cost = self.scoring.evaluate(self.estimator, &refined, data);
        Some((refined, cost))
    }
}
