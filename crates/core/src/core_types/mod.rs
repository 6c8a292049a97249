//! Core types and utilities

pub mod observation;
pub mod risk;
pub mod units;

pub use observation::{LocationContext, Observation};
pub(crate) use observation::sort_by_date;
pub use risk::{classify, RiskLevel};
pub use units::{Celsius, KilometersPerHour};
