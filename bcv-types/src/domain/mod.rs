//! Domain models for the rate service.

pub mod amount;
pub mod rate;

pub use amount::Amount;
pub use rate::{CachedRate, MIN_PLAUSIBLE_RATE, RateSnapshot, RefreshStats, is_plausible_rate};
