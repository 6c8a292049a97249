//! Fixed-size shift register of lagged values
//!
//! Stores the last [`LAG_COUNT`] values of one variable in a ring buffer.
//! Pushing a value makes it lag 1, moves every other lag one slot older, and
//! drops the previous lag 7. Only the head index moves; values are never
//! copied around.

use serde::{Deserialize, Serialize};

/// Number of lagged days kept per variable
pub const LAG_COUNT: usize = 7;

/// Ring buffer holding lags `1..=LAG_COUNT` of a single variable
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "[f64; LAG_COUNT]", into = "[f64; LAG_COUNT]")]
pub struct LagWindow {
    values: [f64; LAG_COUNT],
    /// Slot holding lag 1
    head: usize,
}

impl LagWindow {
    /// Build a window from lags ordered `[lag_1, lag_2, ..., lag_7]`
    pub fn from_lags(lags: [f64; LAG_COUNT]) -> Self {
        Self {
            values: lags,
            head: 0,
        }
    }

    /// Push the newest value; it becomes lag 1 and the old lag 7 is dropped
    #[inline]
    pub fn push(&mut self, newest: f64) {
        self.head = (self.head + LAG_COUNT - 1) % LAG_COUNT;
        self.values[self.head] = newest;
    }

    /// Value `lag` steps back (1-based)
    ///
    /// # Panics
    /// If `lag` is outside `1..=LAG_COUNT`.
    #[inline]
    pub fn lag(&self, lag: usize) -> f64 {
        assert!(
            (1..=LAG_COUNT).contains(&lag),
            "lag must be in 1..={LAG_COUNT}, got {lag}"
        );
        self.values[(self.head + lag - 1) % LAG_COUNT]
    }

    /// Lags in order `[lag_1, ..., lag_7]`
    pub fn to_array(&self) -> [f64; LAG_COUNT] {
        std::array::from_fn(|i| self.lag(i + 1))
    }
}

impl PartialEq for LagWindow {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl From<[f64; LAG_COUNT]> for LagWindow {
    fn from(lags: [f64; LAG_COUNT]) -> Self {
        Self::from_lags(lags)
    }
}

impl From<LagWindow> for [f64; LAG_COUNT] {
    fn from(window: LagWindow) -> Self {
        window.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_shifts_every_lag() {
        let mut window = LagWindow::from_lags([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        window.push(0.0);
        assert_eq!(window.to_array(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_many_pushes_wrap_the_ring() {
        let mut window = LagWindow::default();
        for v in 1..=20 {
            window.push(f64::from(v));
        }
        // Most recent first, only the last seven survive
        assert_eq!(
            window.to_array(),
            [20.0, 19.0, 18.0, 17.0, 16.0, 15.0, 14.0]
        );
        assert_eq!(window.lag(1), 20.0);
        assert_eq!(window.lag(LAG_COUNT), 14.0);
    }

    #[test]
    fn test_equality_ignores_ring_position() {
        let mut rotated = LagWindow::from_lags([9.0; LAG_COUNT]);
        for v in [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0] {
            rotated.push(v);
        }
        let direct = LagWindow::from_lags([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(rotated, direct);
    }

    #[test]
    #[should_panic(expected = "lag must be in")]
    fn test_lag_zero_panics() {
        let _ = LagWindow::default().lag(0);
    }
}
