//! Error type shared by the forecasting pipeline.

use thiserror::Error;

/// Failures surfaced by training, prediction setup, and configuration.
///
/// Classification and feature building are total and never produce an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Not enough history to train a model (fewer than eight observations
    /// means the feature table is empty).
    #[error("insufficient data: {rows} feature rows available, at least 1 required")]
    InsufficientData {
        /// Number of rows that were supplied
        rows: usize,
    },

    /// A regressor was handed feature and target slices of different lengths.
    #[error("feature/target length mismatch: {features} feature rows vs {targets} targets")]
    MismatchedTargets {
        /// Number of feature vectors
        features: usize,
        /// Number of target values
        targets: usize,
    },

    /// The regularised normal equations are not positive definite.
    #[error("normal equations are singular; check the ridge penalty and input values")]
    Singular,

    /// A configuration value is out of range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ForecastError>;
