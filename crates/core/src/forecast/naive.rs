//! Noise-based fallback forecaster
//!
//! Needs nothing beyond the latest reading. Every forecast day is the same
//! baseline plus fresh uniform noise; days never build on each other's
//! perturbed values, so this is not a random walk.

use crate::config::NoiseBounds;
use crate::core_types::{Celsius, KilometersPerHour};
use crate::forecast::{ForecastDay, FORECAST_DAYS};

/// Source of uniformly distributed reals
///
/// Every [`rand::Rng`] is a source. Tests substitute deterministic sources.
pub trait UniformSource {
    /// Draw from the closed interval `[low, high]`
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: rand::Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low..=high)
    }
}

/// Seven-day naive forecast using the thread-local RNG and default bounds
/// (±2 °C, ±5 km/h)
///
/// Not reproducible between calls; use [`forecast_naive_with`] for a seeded
/// or stubbed source.
pub fn forecast_naive(
    current_temp: Celsius,
    current_wind: KilometersPerHour,
) -> [ForecastDay; FORECAST_DAYS] {
    forecast_naive_with(
        current_temp,
        current_wind,
        &NoiseBounds::default(),
        &mut rand::rng(),
    )
}

/// Seven-day naive forecast with explicit bounds and random source
///
/// For each day, temperature is `current_temp + U(-bounds.temperature,
/// +bounds.temperature)` and wind is `current_wind + U(-bounds.wind_speed,
/// +bounds.wind_speed)`, each drawn independently.
pub fn forecast_naive_with<S: UniformSource + ?Sized>(
    current_temp: Celsius,
    current_wind: KilometersPerHour,
    bounds: &NoiseBounds,
    source: &mut S,
) -> [ForecastDay; FORECAST_DAYS] {
    std::array::from_fn(|i| {
        let temperature =
            *current_temp + source.uniform(-bounds.temperature, bounds.temperature);
        let wind_speed = *current_wind + source.uniform(-bounds.wind_speed, bounds.wind_speed);
        ForecastDay::new(
            i as u8 + 1,
            Celsius::new(temperature),
            KilometersPerHour::new(wind_speed),
        )
    })
}
