//! Model training for the temperature and wind-speed regressors
//!
//! Two independent regressors are fitted on the same feature table: one
//! targets temperature, the other wind speed. Models live only as long as the
//! request that trained them.
//!
//! The model class sits behind the [`Regressor`] trait. [`train`] uses the
//! ridge-regularised [`LinearRegressor`]; [`train_with`] accepts any fitting
//! function.

mod linear;

pub use linear::LinearRegressor;

use crate::config::TrainerConfig;
use crate::error::{ForecastError, Result};
use crate::features::{FeatureRow, FeatureVector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// A fitted point regressor over a [`FeatureVector`]
pub trait Regressor {
    /// Predict a single target value
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Temperature and wind-speed models trained for one request
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPair<R = LinearRegressor> {
    /// Predicts daily average temperature (°C)
    pub temperature: R,
    /// Predicts daily average wind speed (km/h)
    pub wind_speed: R,
}

/// Partition rows into `(training, held_out)` with a seeded shuffle
///
/// The held-out partition has `floor(len × holdout_fraction)` rows, so a
/// non-empty table always leaves at least one training row. The same seed and
/// input always give the same partition. Both partitions keep the input's
/// relative order.
pub fn split_train_holdout(
    rows: &[FeatureRow],
    config: &TrainerConfig,
) -> (Vec<FeatureRow>, Vec<FeatureRow>) {
    let holdout_len = (rows.len() as f64 * config.holdout_fraction).floor() as usize;
    let holdout_len = holdout_len.min(rows.len().saturating_sub(1));

    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.split_seed);
    indices.shuffle(&mut rng);

    let mut held_out_idx = indices[..holdout_len].to_vec();
    let mut training_idx = indices[holdout_len..].to_vec();
    held_out_idx.sort_unstable();
    training_idx.sort_unstable();

    let pick = |idx: &[usize]| idx.iter().map(|&i| rows[i]).collect::<Vec<_>>();
    (pick(&training_idx), pick(&held_out_idx))
}

/// Train the default ridge models with the default trainer configuration
///
/// # Errors
/// [`ForecastError::InsufficientData`] when `rows` is empty, or any fitting
/// error from [`LinearRegressor::fit`].
pub fn train(rows: &[FeatureRow]) -> Result<ModelPair> {
    train_with_config(rows, &TrainerConfig::default())
}

/// Train the default ridge models with an explicit configuration
///
/// # Errors
/// Same as [`train`].
pub fn train_with_config(rows: &[FeatureRow], config: &TrainerConfig) -> Result<ModelPair> {
    let penalty = config.ridge_penalty;
    train_with(rows, config, |features, targets| {
        LinearRegressor::fit(features, targets, penalty)
    })
}

/// Train a model pair using a caller-supplied fitting function
///
/// `fit` is called twice on the training partition: once with temperature
/// targets, once with wind-speed targets.
///
/// # Errors
/// [`ForecastError::InsufficientData`] when `rows` is empty; otherwise
/// whatever `fit` returns.
pub fn train_with<R, F>(rows: &[FeatureRow], config: &TrainerConfig, fit: F) -> Result<ModelPair<R>>
where
    F: Fn(&[FeatureVector], &[f64]) -> Result<R>,
{
    if rows.is_empty() {
        return Err(ForecastError::InsufficientData { rows: 0 });
    }

    let (training, held_out) = split_train_holdout(rows, config);
    debug!(
        training = training.len(),
        held_out = held_out.len(),
        seed = config.split_seed,
        "split feature table"
    );

    let features: Vec<FeatureVector> = training.iter().map(FeatureRow::features).collect();
    let tavg: Vec<f64> = training.iter().map(|row| row.tavg).collect();
    let wspd: Vec<f64> = training.iter().map(|row| row.wspd).collect();

    Ok(ModelPair {
        temperature: fit(&features, &tavg)?,
        wind_speed: fit(&features, &wspd)?,
    })
}
