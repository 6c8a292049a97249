//! Ridge-regularised linear least squares
//!
//! Features are standardised (zero mean, unit variance) before fitting so a
//! single penalty treats day-of-year and the lag columns alike. The intercept
//! is the target mean and is never penalised. The normal equations
//!
//! (XᵀX + λI) β = Xᵀy
//!
//! are positive definite for any λ > 0 and are solved by Cholesky
//! factorisation.

use crate::error::{ForecastError, Result};
use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::model::Regressor;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Columns with a spread below this are treated as constant
const MIN_SCALE: f64 = 1e-12;

/// Fitted linear model over a [`FeatureVector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// Per-column mean used for standardisation
    means: DVector<f64>,
    /// Per-column standard deviation (1.0 for constant columns)
    scales: DVector<f64>,
    /// Coefficients on the standardised features
    coefficients: DVector<f64>,
    /// Target mean
    intercept: f64,
}

impl LinearRegressor {
    /// Fit on `features`/`targets` with L2 penalty `ridge_penalty`
    ///
    /// # Errors
    /// - [`ForecastError::InsufficientData`] when `features` is empty
    /// - [`ForecastError::MismatchedTargets`] when the slices differ in length
    /// - [`ForecastError::Singular`] when the system cannot be factorised
    ///   (non-positive penalty or non-finite input)
    pub fn fit(features: &[FeatureVector], targets: &[f64], ridge_penalty: f64) -> Result<Self> {
        let n = features.len();
        if n == 0 {
            return Err(ForecastError::InsufficientData { rows: 0 });
        }
        if targets.len() != n {
            return Err(ForecastError::MismatchedTargets {
                features: n,
                targets: targets.len(),
            });
        }

        let raw = DMatrix::from_fn(n, FEATURE_COUNT, |i, j| features[i][j]);
        let means = DVector::from_fn(FEATURE_COUNT, |j, _| raw.column(j).mean());
        let scales = DVector::from_fn(FEATURE_COUNT, |j, _| {
            // Population variance; a single row has zero spread everywhere
            let spread = raw.column(j).variance().sqrt();
            if spread > MIN_SCALE {
                spread
            } else {
                1.0
            }
        });

        let x = DMatrix::from_fn(n, FEATURE_COUNT, |i, j| (raw[(i, j)] - means[j]) / scales[j]);
        let y = DVector::from_column_slice(targets);
        let intercept = y.mean();
        let centered = y.add_scalar(-intercept);

        let xt = x.transpose();
        let gram = &xt * &x + DMatrix::identity(FEATURE_COUNT, FEATURE_COUNT) * ridge_penalty;
        let rhs = &xt * centered;

        let cholesky = gram.cholesky().ok_or(ForecastError::Singular)?;
        let coefficients = cholesky.solve(&rhs);
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ForecastError::Singular);
        }

        debug!(
            rows = n,
            intercept,
            coefficient_norm = coefficients.norm(),
            "fitted ridge regressor"
        );

        Ok(Self {
            means,
            scales,
            coefficients,
            intercept,
        })
    }

    /// Target mean the model predicts at the feature means
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficients on the standardised features, in feature-vector order
    pub fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let standardised = features
            .iter()
            .enumerate()
            .map(|(j, value)| (value - self.means[j]) / self.scales[j]);
        self.intercept
            + standardised
                .zip(self.coefficients.iter())
                .map(|(x, beta)| x * beta)
                .sum::<f64>()
    }
}
