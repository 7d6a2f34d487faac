//! Cached exchange rate and the snapshots derived from it.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Rates at or below this value are treated as garbage (ratios, percentages,
/// empty cells) rather than a bolívares-per-dollar quote.
pub const MIN_PLAUSIBLE_RATE: f64 = 1.0;

/// Returns true if `value` can be stored as a rate.
pub fn is_plausible_rate(value: f64) -> bool {
    value.is_finite() && value > MIN_PLAUSIBLE_RATE
}

/// The last known good rate together with the moment it was scraped.
///
/// A `CachedRate` can only be built from a plausible value, so holding one
/// means a successful refresh happened at `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedRate {
    value: f64,
    updated_at: DateTime<Utc>,
}

impl CachedRate {
    /// Creates a cached rate, rejecting values that are not finite or not above 1.
    pub fn new(value: f64, updated_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if !is_plausible_rate(value) {
            return Err(DomainError::ImplausibleRate(value));
        }
        Ok(Self { value, updated_at })
    }

    /// Bolívares per US dollar.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Age of the rate at `now`. Negative if the clock went backwards.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.updated_at)
    }

    /// Fresh means strictly younger than `ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.age(now) < ttl
    }
}

/// Value and timestamp read from a single committed cache state.
///
/// `value` is `0.0` and `updated_at` is `None` until the first successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RateSnapshot {
    pub value: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    /// Returns true if a rate has ever been fetched.
    pub fn is_available(&self) -> bool {
        self.updated_at.is_some()
    }
}

impl From<Option<CachedRate>> for RateSnapshot {
    fn from(cached: Option<CachedRate>) -> Self {
        match cached {
            Some(rate) => Self {
                value: rate.value,
                updated_at: Some(rate.updated_at),
            },
            None => Self::default(),
        }
    }
}

/// Counters describing the health of the refresh path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct RefreshStats {
    /// Completed refresh attempts, successful or not.
    pub attempts: u64,
    /// Attempts that kept the previous value.
    pub failures: u64,
    /// Failures since the last successful refresh.
    pub consecutive_failures: u64,
    pub last_success: Option<DateTime<Utc>>,
}

impl RefreshStats {
    /// Returns true if the most recent attempt failed.
    pub fn is_failing(&self) -> bool {
        self.consecutive_failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, second).unwrap()
    }

    #[test]
    fn test_cached_rate_creation() {
        let rate = CachedRate::new(36.5, at(0, 0)).unwrap();
        assert_eq!(rate.value(), 36.5);
        assert_eq!(rate.updated_at(), at(0, 0));
    }

    #[test]
    fn test_implausible_rates_rejected() {
        for value in [0.0, 1.0, 0.027, -36.5, f64::NAN, f64::INFINITY] {
            let result = CachedRate::new(value, at(0, 0));
            assert!(
                matches!(result, Err(DomainError::ImplausibleRate(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_freshness_boundary() {
        let rate = CachedRate::new(36.5, at(0, 0)).unwrap();
        let ttl = TimeDelta::minutes(15);

        assert!(rate.is_fresh(at(14, 59), ttl));
        assert!(!rate.is_fresh(at(15, 0), ttl));
        assert!(!rate.is_fresh(at(15, 1), ttl));
    }

    #[test]
    fn test_snapshot_from_empty_cache() {
        let snapshot = RateSnapshot::from(None);
        assert_eq!(snapshot.value, 0.0);
        assert!(snapshot.updated_at.is_none());
        assert!(!snapshot.is_available());
    }

    #[test]
    fn test_snapshot_from_cached_rate() {
        let rate = CachedRate::new(36.5, at(3, 0)).unwrap();
        let snapshot = RateSnapshot::from(Some(rate));
        assert_eq!(snapshot.value, 36.5);
        assert_eq!(snapshot.updated_at, Some(at(3, 0)));
    }
}
