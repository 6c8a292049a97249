//! Daily weather observations and the location they belong to

use crate::core_types::units::{Celsius, KilometersPerHour};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather at a single location
///
/// Sequences of observations are expected in ascending date order. Duplicate
/// dates are tolerated and kept in their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// Daily average temperature
    pub temperature: Celsius,
    /// Daily average wind speed
    pub wind_speed: KilometersPerHour,
}

impl Observation {
    /// Create an observation from raw values (°C, km/h)
    #[must_use]
    pub fn new(date: NaiveDate, temperature: f64, wind_speed: f64) -> Self {
        Self {
            date,
            temperature: Celsius::new(temperature),
            wind_speed: KilometersPerHour::new(wind_speed),
        }
    }
}

/// Sort observations by date, keeping duplicates in input order
pub(crate) fn sort_by_date(observations: &[Observation]) -> Vec<Observation> {
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|obs| obs.date);
    sorted
}

/// Named place an observation sequence was resolved for
///
/// Coordinates are carried for display only; nothing in the forecasting math
/// reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContext {
    /// Display name as it appears in the source data (e.g. "New York")
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl LocationContext {
    /// Create a location context
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Case-insensitive name match, ignoring surrounding whitespace
    ///
    /// # Example
    /// ```
    /// use wildfire_risk_core::LocationContext;
    ///
    /// let perth = LocationContext::new("Perth", -31.95, 115.86);
    /// assert!(perth.matches("  PERTH "));
    /// assert!(!perth.matches("Perth Hills"));
    /// ```
    pub fn matches(&self, query: &str) -> bool {
        self.name.trim().to_lowercase() == query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_sort_by_date_is_stable_for_duplicates() {
        let observations = [
            Observation::new(day(3), 30.0, 1.0),
            Observation::new(day(1), 10.0, 1.0),
            Observation::new(day(3), 31.0, 2.0),
            Observation::new(day(2), 20.0, 1.0),
        ];

        let sorted = sort_by_date(&observations);

        let temps: Vec<f64> = sorted.iter().map(|o| *o.temperature).collect();
        assert_eq!(temps, vec![10.0, 20.0, 30.0, 31.0]);
    }

    #[test]
    fn test_location_matches_case_insensitively() {
        let location = LocationContext::new("New York", 40.71, -74.01);
        assert!(location.matches("new york"));
        assert!(location.matches("NEW YORK\n"));
        assert!(!location.matches("york"));
    }
}
