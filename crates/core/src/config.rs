//! Forecast configuration
//!
//! Plain data with serde support and sensible defaults. Binaries map their
//! command-line arguments onto these structs.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Settings for fitting the temperature and wind-speed regressors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Share of feature rows held out from fitting, in `[0, 1)`
    ///
    /// The held-out size is `floor(rows × fraction)`, so any non-empty table
    /// keeps at least one training row.
    pub holdout_fraction: f64,
    /// Seed for the shuffle that picks the held-out rows
    pub split_seed: u64,
    /// L2 penalty on the standardised coefficients (must be > 0)
    pub ridge_penalty: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            holdout_fraction: 0.2,
            split_seed: 42,
            ridge_penalty: 1e-3,
        }
    }
}

/// Half-widths of the uniform perturbation used by the naive forecaster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseBounds {
    /// Temperature noise is drawn from `[-temperature, +temperature]` (°C)
    pub temperature: f64,
    /// Wind noise is drawn from `[-wind_speed, +wind_speed]` (km/h)
    pub wind_speed: f64,
}

impl Default for NoiseBounds {
    fn default() -> Self {
        Self {
            temperature: 2.0,
            wind_speed: 5.0,
        }
    }
}

/// Top-level configuration for a risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Regression training settings
    pub trainer: TrainerConfig,
    /// Naive forecaster perturbation bounds
    pub noise: NoiseBounds,
    /// Number of trailing observations reported as recent history
    pub history_days: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trainer: TrainerConfig::default(),
            noise: NoiseBounds::default(),
            history_days: 7,
        }
    }
}

impl ForecastConfig {
    /// Default configuration (one week of recent history)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field is within its documented range
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let fraction = self.trainer.holdout_fraction;
        if !(0.0..1.0).contains(&fraction) {
            return Err(invalid(
                "trainer.holdout_fraction",
                format!("must be in [0, 1), got {fraction}"),
            ));
        }
        let penalty = self.trainer.ridge_penalty;
        if !penalty.is_finite() || penalty <= 0.0 {
            return Err(invalid(
                "trainer.ridge_penalty",
                format!("must be finite and positive, got {penalty}"),
            ));
        }
        for (field, bound) in [
            ("noise.temperature", self.noise.temperature),
            ("noise.wind_speed", self.noise.wind_speed),
        ] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(invalid(
                    field,
                    format!("must be finite and non-negative, got {bound}"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ForecastError {
    ForecastError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ForecastConfig::new();
        assert_eq!(config.history_days, 7);
        assert_eq!(config.trainer.split_seed, 42);
        assert_eq!(config.noise.temperature, 2.0);
        assert_eq!(config.noise.wind_speed, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_holdout_fraction_of_one_rejected() {
        let mut config = ForecastConfig::new();
        config.trainer.holdout_fraction = 1.0;
        match config.validate() {
            Err(ForecastError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "trainer.holdout_fraction");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_ridge_penalty_rejected() {
        let mut config = ForecastConfig::new();
        config.trainer.ridge_penalty = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_noise_rejected() {
        let mut config = ForecastConfig::new();
        config.noise.wind_speed = -1.0;
        match config.validate() {
            Err(ForecastError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "noise.wind_speed");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}
