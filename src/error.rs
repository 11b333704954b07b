//! Error types for the search engine and its helpers.

use thiserror::Error;

/// Errors reported before or while a search is configured.
///
/// Degenerate samples are not errors: the engine skips them silently. A search
/// that never finds a model is reported through
/// [`BestModel::model`](crate::core::BestModel) being `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RansacError {
    /// The bound estimator declared a minimal sample of zero points.
    #[error("estimator sample size must be at least 1")]
    ZeroSampleSize,

    /// The dataset cannot provide a minimal sample of unique indices.
    #[error("dataset of {len} points is too small for minimal samples of {sample_size} (need more than {sample_size})")]
    InsufficientData { len: usize, sample_size: usize },

    /// A configuration value is out of its valid range.
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// An index referred past the end of the dataset.
    #[error("index {index} is out of bounds for a dataset of {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RansacError>;
