//! Wildfire risk classification from temperature and wind speed
//!
//! A deliberately simple two-threshold rule. Both conditions of a tier must
//! hold, and the tiers are checked from most to least severe:
//!
//! | Tier   | Temperature | Wind speed  |
//! |--------|-------------|-------------|
//! | High   | > 30 °C     | > 20 km/h   |
//! | Medium | > 25 °C     | > 10 km/h   |
//! | Low    | otherwise   |             |

use crate::core_types::units::{Celsius, KilometersPerHour};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold constants for each risk tier (exclusive lower bounds)
pub mod thresholds {
    /// High risk requires temperature strictly above this value (°C)
    pub const HIGH_TEMPERATURE: f64 = 30.0;
    /// High risk requires wind speed strictly above this value (km/h)
    pub const HIGH_WIND_SPEED: f64 = 20.0;
    /// Medium risk requires temperature strictly above this value (°C)
    pub const MEDIUM_TEMPERATURE: f64 = 25.0;
    /// Medium risk requires wind speed strictly above this value (km/h)
    pub const MEDIUM_WIND_SPEED: f64 = 10.0;
}

/// Ordinal wildfire risk label, ordered by severity (`Low < Medium < High`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Neither tier's thresholds are exceeded
    Low,
    /// Warm and breezy
    Medium,
    /// Hot and windy
    High,
}

impl RiskLevel {
    /// Label as shown to users
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single temperature/wind-speed pair
///
/// Pure and total: any pair of reals (negative, huge, or NaN) yields a label.
/// NaN fails every comparison and therefore classifies as `Low`.
///
/// # Example
/// ```
/// use wildfire_risk_core::{classify, Celsius, KilometersPerHour, RiskLevel};
///
/// assert_eq!(classify(Celsius::new(29.0), KilometersPerHour::new(25.0)), RiskLevel::Medium);
/// assert_eq!(classify(Celsius::new(35.0), KilometersPerHour::new(25.0)), RiskLevel::High);
/// ```
pub fn classify(temperature: Celsius, wind_speed: KilometersPerHour) -> RiskLevel {
    use thresholds::{HIGH_TEMPERATURE, HIGH_WIND_SPEED, MEDIUM_TEMPERATURE, MEDIUM_WIND_SPEED};

    let (t, w) = (*temperature, *wind_speed);
    if t > HIGH_TEMPERATURE && w > HIGH_WIND_SPEED {
        RiskLevel::High
    } else if t > MEDIUM_TEMPERATURE && w > MEDIUM_WIND_SPEED {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(t: f64, w: f64) -> RiskLevel {
        classify(Celsius::new(t), KilometersPerHour::new(w))
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(rate(30.0, 25.0), RiskLevel::Medium);
        assert_eq!(rate(35.0, 20.0), RiskLevel::Medium);
        assert_eq!(rate(30.001, 20.001), RiskLevel::High);
        assert_eq!(rate(25.0, 15.0), RiskLevel::Low);
        assert_eq!(rate(28.0, 10.0), RiskLevel::Low);
    }

    #[test]
    fn test_hot_but_calm_is_low() {
        assert_eq!(rate(45.0, 5.0), RiskLevel::Low);
    }

    #[test]
    fn test_windy_but_cool_is_low() {
        assert_eq!(rate(12.0, 80.0), RiskLevel::Low);
    }

    #[test]
    fn test_non_finite_inputs_are_classified() {
        assert_eq!(rate(f64::NAN, 50.0), RiskLevel::Low);
        assert_eq!(rate(f64::INFINITY, f64::INFINITY), RiskLevel::High);
        assert_eq!(rate(f64::NEG_INFINITY, 100.0), RiskLevel::Low);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(
            [RiskLevel::Medium, RiskLevel::High, RiskLevel::Low].iter().max(),
            Some(&RiskLevel::High)
        );
    }
}
