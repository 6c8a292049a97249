//! Request-level risk assessment for one location
//!
//! Ties the pieces together the way an interactive caller uses them:
//! - current conditions from the latest observation
//! - the last few observations with their risk labels
//! - a seven-day forecast from the regression chain, falling back to the
//!   naive forecaster when the history is too short to train on
//!
//! Everything is built fresh per call; nothing is cached between requests.

use crate::config::ForecastConfig;
use crate::core_types::{
    classify, sort_by_date, Celsius, KilometersPerHour, LocationContext, Observation, RiskLevel,
};
use crate::error::{ForecastError, Result};
use crate::features::build_features;
use crate::forecast::{
    classify_forecast, forecast_naive_with, predict_next_7, ForecastDay, UniformSource,
    FORECAST_DAYS,
};
use crate::model::train_with_config;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// How the forecast in an assessment was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastMethod {
    /// Lagged-feature regression rolled forward day by day
    Regression,
    /// Latest reading plus bounded noise (too little history to train)
    Naive,
}

/// Latest observed weather and its risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Date of the latest observation
    pub date: NaiveDate,
    /// Observed temperature
    pub temperature: Celsius,
    /// Observed wind speed
    pub wind_speed: KilometersPerHour,
    /// Risk for the observed pair
    pub risk: RiskLevel,
}

impl fmt::Display for CurrentConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Temperature: {}, Wind Speed: {}, Risk Level: {}",
            self.temperature, self.wind_speed, self.risk
        )
    }
}

/// A historical observation with its risk label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedObservation {
    /// The observation as supplied
    pub observation: Observation,
    /// Risk for the observed pair
    pub risk: RiskLevel,
}

impl From<Observation> for ClassifiedObservation {
    fn from(observation: Observation) -> Self {
        Self {
            observation,
            risk: classify(observation.temperature, observation.wind_speed),
        }
    }
}

/// Full answer to "what is the wildfire risk at this location?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Where the observations came from (display only)
    pub location: LocationContext,
    /// Latest observed conditions
    pub current: CurrentConditions,
    /// Trailing observations, oldest first
    pub recent: Vec<ClassifiedObservation>,
    /// Classified seven-day forecast
    pub forecast: [ForecastDay; FORECAST_DAYS],
    /// Which forecaster produced `forecast`
    pub method: ForecastMethod,
}

impl RiskAssessment {
    /// Most severe risk across the forecast
    pub fn peak_risk(&self) -> RiskLevel {
        self.forecast
            .iter()
            .map(|day| day.risk)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

/// Assess current and forecast wildfire risk for one location
///
/// Observations may arrive in any order; they are sorted by date. When the
/// history is shorter than eight days the regression chain has no rows to
/// train on and the naive forecaster is used instead, drawing from `source`.
///
/// # Errors
/// - [`ForecastError::InvalidConfig`] if `config` fails validation
/// - [`ForecastError::InsufficientData`] if `observations` is empty
/// - any training error other than insufficient data
pub fn assess<S: UniformSource + ?Sized>(
    location: LocationContext,
    observations: &[Observation],
    config: &ForecastConfig,
    source: &mut S,
) -> Result<RiskAssessment> {
    config.validate()?;

    let sorted = sort_by_date(observations);
    let Some(latest) = sorted.last().copied() else {
        return Err(ForecastError::InsufficientData { rows: 0 });
    };

    let current = CurrentConditions {
        date: latest.date,
        temperature: latest.temperature,
        wind_speed: latest.wind_speed,
        risk: classify(latest.temperature, latest.wind_speed),
    };

    let recent_start = sorted.len().saturating_sub(config.history_days);
    let recent = sorted[recent_start..]
        .iter()
        .copied()
        .map(ClassifiedObservation::from)
        .collect();

    let rows = build_features(&sorted);
    let (forecast, method) = match rows.last() {
        Some(last_row) => {
            let models = train_with_config(&rows, &config.trainer)?;
            let pairs = predict_next_7(&models, last_row);
            (classify_forecast(&pairs), ForecastMethod::Regression)
        }
        None => {
            warn!(
                location = %location.name,
                observations = sorted.len(),
                "not enough history to train, using naive forecast"
            );
            let days = forecast_naive_with(
                latest.temperature,
                latest.wind_speed,
                &config.noise,
                source,
            );
            (days, ForecastMethod::Naive)
        }
    };

    let assessment = RiskAssessment {
        location,
        current,
        recent,
        forecast,
        method,
    };
    info!(
        location = %assessment.location.name,
        current = %assessment.current.risk,
        peak = %assessment.peak_risk(),
        method = ?assessment.method,
        "assessed wildfire risk"
    );
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history(len: u64, temp: impl Fn(u64) -> f64, wind: f64) -> Vec<Observation> {
        let start = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        (0..len)
            .map(|i| Observation::new(start + Days::new(i), temp(i), wind))
            .collect()
    }

    fn place() -> LocationContext {
        LocationContext::new("Perth", -31.95, 115.86)
    }

    #[test]
    fn test_short_history_falls_back_to_naive() {
        let obs = history(5, |i| 10.0 + i as f64, 2.0);
        let mut rng = StdRng::seed_from_u64(1);

        let assessment = assess(place(), &obs, &ForecastConfig::new(), &mut rng).unwrap();

        assert_eq!(assessment.method, ForecastMethod::Naive);
        assert_eq!(*assessment.current.temperature, 14.0);
        assert_eq!(assessment.recent.len(), 5);
        assert!(assessment.forecast.iter().all(|d| d.risk == RiskLevel::Low));
    }

    #[test]
    fn test_long_history_uses_regression() {
        let obs = history(30, |i| 22.0 + (i % 5) as f64, 15.0);
        let mut rng = StdRng::seed_from_u64(1);

        let assessment = assess(place(), &obs, &ForecastConfig::new(), &mut rng).unwrap();

        assert_eq!(assessment.method, ForecastMethod::Regression);
        assert_eq!(assessment.recent.len(), 7);
        assert_eq!(
            assessment.recent.last().map(|r| r.observation.date),
            Some(assessment.current.date)
        );
        // Constant wind is learned exactly
        for day in &assessment.forecast {
            assert!((*day.wind_speed - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_current_conditions_use_latest_date() {
        let mut obs = history(3, |i| 20.0 + i as f64, 12.0);
        obs.reverse();
        let mut rng = StdRng::seed_from_u64(1);

        let assessment = assess(place(), &obs, &ForecastConfig::new(), &mut rng).unwrap();

        assert_eq!(*assessment.current.temperature, 22.0);
        assert_eq!(assessment.current.risk, RiskLevel::Low);
    }

    #[test]
    fn test_empty_history_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = assess(place(), &[], &ForecastConfig::new(), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            ForecastError::InsufficientData { rows: 0 }
        );
    }

    #[test]
    fn test_invalid_config_is_rejected_before_work() {
        let mut config = ForecastConfig::new();
        config.trainer.ridge_penalty = -1.0;
        let mut rng = StdRng::seed_from_u64(1);

        let result = assess(place(), &history(20, |_| 20.0, 5.0), &config, &mut rng);
        assert!(matches!(result, Err(ForecastError::InvalidConfig { .. })));
    }

    #[test]
    fn test_peak_risk_is_maximum_over_forecast() {
        let obs = history(4, |_| 31.0, 18.0);
        // Ceiling noise pushes every day to 33 °C / 23 km/h
        struct Ceiling;
        impl UniformSource for Ceiling {
            fn uniform(&mut self, _low: f64, high: f64) -> f64 {
                high
            }
        }

        let assessment = assess(place(), &obs, &ForecastConfig::new(), &mut Ceiling).unwrap();

        assert_eq!(assessment.current.risk, RiskLevel::Medium);
        assert_eq!(assessment.peak_risk(), RiskLevel::High);
    }
}
