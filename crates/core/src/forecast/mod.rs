//! Seven-day forecasts
//!
//! Two forecasters produce the same output type:
//! - [`naive`]: fixed baseline plus independent uniform noise per day
//! - [`predictor`]: iterative multi-step regression over lagged features
//!
//! Each produced temperature/wind pair is classified into a [`ForecastDay`].

pub mod naive;
pub mod predictor;

pub use naive::{forecast_naive, forecast_naive_with, UniformSource};
pub use predictor::{predict_horizon, predict_next_7};

use crate::core_types::{classify, Celsius, KilometersPerHour, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast horizon in days
pub const FORECAST_DAYS: usize = 7;

/// One classified day of a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// 1-based position in the forecast ("Day N")
    pub day: u8,
    /// Projected temperature
    pub temperature: Celsius,
    /// Projected wind speed
    pub wind_speed: KilometersPerHour,
    /// Risk derived from `temperature` and `wind_speed`
    pub risk: RiskLevel,
}

impl ForecastDay {
    /// Classify a projected pair as day `day`
    pub fn new(day: u8, temperature: Celsius, wind_speed: KilometersPerHour) -> Self {
        Self {
            day,
            temperature,
            wind_speed,
            risk: classify(temperature, wind_speed),
        }
    }

    /// Display label, e.g. `"Day 3"`
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Temperature: {}, Wind Speed: {}, Risk Level: {}",
            self.label(),
            self.temperature,
            self.wind_speed,
            self.risk
        )
    }
}

/// Turn projected pairs into labelled, classified forecast days
pub fn classify_forecast(
    pairs: &[(Celsius, KilometersPerHour); FORECAST_DAYS],
) -> [ForecastDay; FORECAST_DAYS] {
    std::array::from_fn(|i| {
        let (temperature, wind_speed) = pairs[i];
        ForecastDay::new(i as u8 + 1, temperature, wind_speed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_day_display() {
        let day = ForecastDay::new(3, Celsius::new(27.44), KilometersPerHour::new(14.0));
        assert_eq!(
            day.to_string(),
            "Day 3: Temperature: 27.4 °C, Wind Speed: 14.0 km/h, Risk Level: Medium"
        );
    }

    #[test]
    fn test_classify_forecast_labels_in_order() {
        let pairs = std::array::from_fn(|i| {
            (
                Celsius::new(24.0 + 2.0 * i as f64),
                KilometersPerHour::new(8.0 + 3.0 * i as f64),
            )
        });
        let days = classify_forecast(&pairs);

        let labels: Vec<String> = days.iter().map(ForecastDay::label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("Day 1"));
        assert_eq!(labels.last().map(String::as_str), Some("Day 7"));
        assert_eq!(days[0].risk, RiskLevel::Low); // 24 °C, 8 km/h
        assert_eq!(days[1].risk, RiskLevel::Medium); // 26 °C, 11 km/h
        assert_eq!(days[4].risk, RiskLevel::Medium); // 32 °C, 20 km/h is not > 20
        assert_eq!(days[5].risk, RiskLevel::High); // 34 °C, 23 km/h
    }
}
