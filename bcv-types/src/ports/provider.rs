//! Rate provider port.
//!
//! This is what the conversion service depends on. The scraping cache is the
//! production adapter.

use crate::domain::{RateSnapshot, RefreshStats};

/// Port trait for something that can hand out the current rate.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Returns the best known rate, refreshing it first if it is stale.
    ///
    /// Never fails: when no rate can be obtained the previous one (or zero)
    /// is returned.
    async fn current(&self) -> RateSnapshot;

    /// Returns the cached rate without refreshing.
    fn peek(&self) -> RateSnapshot;

    /// Returns refresh counters.
    fn stats(&self) -> RefreshStats;
}
