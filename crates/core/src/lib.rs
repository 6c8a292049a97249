//! Wildfire Risk Forecast Core Library
//!
//! Assesses short-term wildfire risk for a single location from its daily
//! temperature and wind-speed history, and projects that risk seven days
//! forward.
//!
//! ## Pipeline
//!
//! - [`classify`]: two-threshold risk rule over a temperature/wind pair
//! - [`forecast_naive`]: latest reading plus bounded, independent daily noise
//! - [`build_features`]: day of year plus seven daily lags of each variable
//! - [`train`]: independent temperature and wind-speed regressors
//! - [`predict_next_7`]: iterative prediction feeding each day back as a lag
//! - [`assess`]: current conditions, recent history, and forecast in one call
//!
//! Dataset ingestion, location lookup, and any presentation layer belong to
//! the caller. The library hands back plain data and logs through `tracing`
//! without installing a subscriber.

// Core types and utilities
pub mod core_types;

pub mod assessment;
pub mod config;
pub mod error;
pub mod features;
pub mod forecast;
pub mod model;

// Re-export core types
pub use core_types::{
    classify, Celsius, KilometersPerHour, LocationContext, Observation, RiskLevel,
};

// Re-export the pipeline
pub use assessment::{
    assess, ClassifiedObservation, CurrentConditions, ForecastMethod, RiskAssessment,
};
pub use config::{ForecastConfig, NoiseBounds, TrainerConfig};
pub use error::{ForecastError, Result};
pub use features::{
    build_features, FeatureRow, FeatureVector, LagWindow, FEATURE_COUNT, LAG_COUNT,
};
pub use forecast::{
    classify_forecast, forecast_naive, forecast_naive_with, predict_horizon, predict_next_7,
    ForecastDay, UniformSource, FORECAST_DAYS,
};
pub use model::{
    split_train_holdout, train, train_with, train_with_config, LinearRegressor, ModelPair,
    Regressor,
};
