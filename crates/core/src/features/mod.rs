//! Supervised feature table built from a daily observation sequence
//!
//! Each row pairs the day of year and the previous seven days of temperature
//! and wind speed with that day's actual values. Lags are positional: a gap
//! in the calendar is not filled, the previous *row* is simply lag 1.
//!
//! # Layout of a feature vector
//!
//! | Index   | Value                   |
//! |---------|-------------------------|
//! | 0       | day of year             |
//! | 1..=7   | `tavg_lag_1..tavg_lag_7` |
//! | 8..=14  | `wspd_lag_1..wspd_lag_7` |

mod lag_window;

pub use lag_window::{LagWindow, LAG_COUNT};

use crate::core_types::{sort_by_date, Observation};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width of the model input: day of year plus both lag windows
pub const FEATURE_COUNT: usize = 1 + 2 * LAG_COUNT;

/// Model input vector, see the module docs for the layout
pub type FeatureVector = [f64; FEATURE_COUNT];

/// One training or prediction example
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Ordinal day within the year (1-366 for observed rows)
    pub day_of_year: u32,
    /// Previous temperatures, lag 1 = the day before
    pub tavg_lags: LagWindow,
    /// Previous wind speeds, lag 1 = the day before
    pub wspd_lags: LagWindow,
    /// Temperature on this day (label)
    pub tavg: f64,
    /// Wind speed on this day (label)
    pub wspd: f64,
}

impl FeatureRow {
    /// Assemble a model input from its parts
    pub fn feature_vector(
        day_of_year: u32,
        tavg_lags: &LagWindow,
        wspd_lags: &LagWindow,
    ) -> FeatureVector {
        let mut features = [0.0; FEATURE_COUNT];
        features[0] = f64::from(day_of_year);
        features[1..=LAG_COUNT].copy_from_slice(&tavg_lags.to_array());
        features[LAG_COUNT + 1..].copy_from_slice(&wspd_lags.to_array());
        features
    }

    /// Model input for this row
    pub fn features(&self) -> FeatureVector {
        Self::feature_vector(self.day_of_year, &self.tavg_lags, &self.wspd_lags)
    }
}

/// Build the lagged feature table for one location
///
/// Observations are re-sorted by date first (stable, so duplicate dates keep
/// their input order). The first [`LAG_COUNT`] observations only seed the lag
/// windows, so `n` observations yield `n - 7` rows and fewer than eight yield
/// none. An empty result is not an error; callers fall back to the naive
/// forecaster.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use wildfire_risk_core::{build_features, Observation};
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let history: Vec<Observation> = (0..10)
///     .map(|i| Observation::new(start + chrono::Days::new(i), 20.0 + i as f64, 25.0))
///     .collect();
///
/// let rows = build_features(&history);
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[0].tavg_lags.lag(1), 26.0);
/// ```
pub fn build_features(observations: &[Observation]) -> Vec<FeatureRow> {
    let sorted = sort_by_date(observations);

    let mut tavg_lags = LagWindow::default();
    let mut wspd_lags = LagWindow::default();
    let mut rows = Vec::with_capacity(sorted.len().saturating_sub(LAG_COUNT));

    for (index, obs) in sorted.iter().enumerate() {
        if index >= LAG_COUNT {
            rows.push(FeatureRow {
                day_of_year: obs.date.ordinal(),
                tavg_lags,
                wspd_lags,
                tavg: *obs.temperature,
                wspd: *obs.wind_speed,
            });
        }
        tavg_lags.push(*obs.temperature);
        wspd_lags.push(*obs.wind_speed);
    }

    debug!(
        observations = sorted.len(),
        rows = rows.len(),
        "built lagged feature table"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn history(len: u64, start: NaiveDate) -> Vec<Observation> {
        (0..len)
            .map(|i| {
                Observation::new(
                    start + Days::new(i),
                    10.0 + i as f64,
                    100.0 + i as f64,
                )
            })
            .collect()
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
    }

    #[test]
    fn test_short_history_yields_no_rows() {
        for len in 0..8 {
            assert!(build_features(&history(len, jan(1))).is_empty(), "len {len}");
        }
    }

    #[test]
    fn test_row_count_is_len_minus_lags() {
        for len in 8..40 {
            let rows = build_features(&history(len, jan(1)));
            assert_eq!(rows.len() as u64, len - LAG_COUNT as u64);
        }
    }

    #[test]
    fn test_lags_point_at_preceding_observations() {
        let obs = history(12, jan(1));
        let rows = build_features(&obs);

        for (offset, row) in rows.iter().enumerate() {
            let i = offset + LAG_COUNT;
            assert_eq!(row.tavg, *obs[i].temperature);
            assert_eq!(row.wspd, *obs[i].wind_speed);
            for lag in 1..=LAG_COUNT {
                assert_eq!(row.tavg_lags.lag(lag), *obs[i - lag].temperature);
                assert_eq!(row.wspd_lags.lag(lag), *obs[i - lag].wind_speed);
            }
        }
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let mut obs = history(9, jan(1));
        obs.reverse();
        let rows = build_features(&obs);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tavg, 17.0);
        assert_eq!(rows[0].tavg_lags.lag(1), 16.0);
        assert_eq!(rows[1].day_of_year, 9);
    }

    #[test]
    fn test_day_of_year_uses_calendar_ordinal() {
        let obs = history(10, NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
        let rows = build_features(&obs);

        // 2024 is a leap year: Dec 31 is day 366, then Jan 1 restarts
        let days: Vec<u32> = rows.iter().map(|r| r.day_of_year).collect();
        assert_eq!(days, vec![366, 1, 2]);
    }

    #[test]
    fn test_feature_vector_layout() {
        let rows = build_features(&history(8, jan(10)));
        let features = rows[0].features();

        assert_eq!(features[0], 17.0);
        assert_eq!(features[1], 16.0); // tavg lag 1
        assert_eq!(features[7], 10.0); // tavg lag 7
        assert_eq!(features[8], 106.0); // wspd lag 1
        assert_eq!(features[14], 100.0); // wspd lag 7
    }
}
