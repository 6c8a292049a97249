//! Iterative multi-step prediction
//!
//! Starting from the most recent feature row, each step:
//! 1. advances the day of year by one, wrapping modulo 365
//! 2. pushes the previous step's temperature/wind (actual for the seed row,
//!    predicted afterwards) into the lag windows as lag 1
//! 3. predicts both variables from the shifted features
//! 4. stores the predictions as the new row's values
//!
//! After the first step the lags contain predictions rather than observations,
//! so errors compound. That is the intended multi-step behaviour; the models
//! are never re-grounded on observed data mid-horizon.
//!
//! The day-of-year wrap ignores leap years: day 364 is followed by day 0, and
//! a seed row on day 365 or 366 continues at day 1 or 2.

use crate::core_types::{Celsius, KilometersPerHour};
use crate::features::FeatureRow;
use crate::forecast::FORECAST_DAYS;
use crate::model::{ModelPair, Regressor};
use tracing::debug;

/// Length of the year used for the day-of-year wrap
pub const DAYS_PER_YEAR: u32 = 365;

/// The feature row following `last`, before its values are predicted
fn advance(last: &FeatureRow) -> FeatureRow {
    let mut next = *last;
    next.day_of_year = (last.day_of_year + 1) % DAYS_PER_YEAR;
    next.tavg_lags.push(last.tavg);
    next.wspd_lags.push(last.wspd);
    next
}

/// Roll the models forward `steps` days from `seed`
///
/// Returns the generated rows: each row's lags are the inputs the models saw
/// and its `tavg`/`wspd` are the predictions for that day.
pub fn predict_horizon<R: Regressor>(
    models: &ModelPair<R>,
    seed: &FeatureRow,
    steps: usize,
) -> Vec<FeatureRow> {
    let mut rows = Vec::with_capacity(steps);
    let mut last = *seed;

    for step in 1..=steps {
        let mut next = advance(&last);
        let features = next.features();
        next.tavg = models.temperature.predict(&features);
        next.wspd = models.wind_speed.predict(&features);

        debug!(
            step,
            day_of_year = next.day_of_year,
            temperature = next.tavg,
            wind_speed = next.wspd,
            "predicted forecast step"
        );

        rows.push(next);
        last = next;
    }
    rows
}

/// Predict the next seven days of temperature and wind speed
///
/// `last_row` is normally the final row of the location's feature table.
pub fn predict_next_7<R: Regressor>(
    models: &ModelPair<R>,
    last_row: &FeatureRow,
) -> [(Celsius, KilometersPerHour); FORECAST_DAYS] {
    let rows = predict_horizon(models, last_row, FORECAST_DAYS);
    std::array::from_fn(|i| {
        (
            Celsius::new(rows[i].tavg),
            KilometersPerHour::new(rows[i].wspd),
        )
    })
}
