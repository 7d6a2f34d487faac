//! Rate cache with a fixed TTL and coalesced refreshes.

use std::sync::{Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, instrument, warn};

use bcv_types::{
    CachedRate, Clock, FetchError, MarkupSource, RateProvider, RateSnapshot, RefreshError,
    RefreshStats, SystemClock,
};

use crate::extract::extract_rate;
use crate::fetch::FETCH_TIMEOUT;

/// Maximum age of a cached rate before the next read refreshes it.
pub const RATE_TTL_MINUTES: i64 = 15;

/// Last known good rate plus the policy for refreshing it.
///
/// Reads of a fresh rate only take a short read lock. A stale read refreshes
/// synchronously; concurrent stale reads wait for that single refresh instead
/// of starting their own. Failures never surface: the previous rate (or
/// zero) is served until a later refresh succeeds.
pub struct RateCache<S: MarkupSource, C: Clock = SystemClock> {
    source: S,
    clock: C,
    ttl: TimeDelta,
    state: RwLock<Option<CachedRate>>,
    refresh_lock: tokio::sync::Mutex<()>,
    stats: Mutex<RefreshStats>,
}

impl<S: MarkupSource> RateCache<S, SystemClock> {
    /// Creates an empty cache reading the wall clock.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock)
    }
}

impl<S: MarkupSource, C: Clock> RateCache<S, C> {
    /// Creates an empty cache with an injected clock.
    pub fn with_clock(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            ttl: TimeDelta::minutes(RATE_TTL_MINUTES),
            state: RwLock::new(None),
            refresh_lock: tokio::sync::Mutex::new(()),
            stats: Mutex::new(RefreshStats::default()),
        }
    }

    /// Current rate in bolívares per dollar, `0.0` if none was ever fetched.
    pub async fn get_rate(&self) -> f64 {
        self.current_snapshot().await.value
    }

    /// Time of the last successful refresh. Never triggers a refresh.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.cached().map(|rate| rate.updated_at())
    }

    /// Cached rate, without refreshing.
    pub fn cached(&self) -> Option<CachedRate> {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn refresh_stats(&self) -> RefreshStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached rate, refreshing it first if it is missing or stale.
    pub async fn current_snapshot(&self) -> RateSnapshot {
        if let Some(rate) = self.fresh() {
            debug!(rate = rate.value(), "Rate cache HIT");
            return Some(rate).into();
        }

        // Attempts completed before we queue up. If this changes while we
        // wait, a concurrent caller already refreshed on our behalf.
        let seen = self.refresh_stats().attempts;
        let _guard = self.refresh_lock.lock().await;

        if self.refresh_stats().attempts != seen {
            debug!("Rate refreshed by a concurrent request");
            return self.cached().into();
        }
        // A refresh may have committed between the first check and `seen`.
        if let Some(rate) = self.fresh() {
            debug!(rate = rate.value(), "Rate cache HIT after waiting");
            return Some(rate).into();
        }

        debug!("Rate cache MISS");
        self.refresh().await;
        self.cached().into()
    }

    fn fresh(&self) -> Option<CachedRate> {
        let now = self.clock.now();
        self.cached().filter(|rate| rate.is_fresh(now, self.ttl))
    }

    /// Runs one fetch + extract and commits the outcome. Caller holds `refresh_lock`.
    #[instrument(name = "RateRefresh", skip(self))]
    async fn refresh(&self) {
        match self.fetch_rate().await {
            Ok(rate) => self.commit(rate),
            Err(err) => self.record_failure(&err),
        }
    }

    async fn fetch_rate(&self) -> Result<CachedRate, RefreshError> {
        let markup = tokio::time::timeout(FETCH_TIMEOUT, self.source.fetch())
            .await
            .map_err(|_| FetchError::Timeout)??;
        let value = extract_rate(&markup)?;
        Ok(CachedRate::new(value, self.clock.now())?)
    }

    fn commit(&self, rate: CachedRate) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = Some(rate);

        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats.attempts += 1;
        stats.consecutive_failures = 0;
        stats.last_success = Some(rate.updated_at());

        info!(rate = rate.value(), "Exchange rate refreshed");
    }

    fn record_failure(&self, err: &RefreshError) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        stats.attempts += 1;
        stats.failures += 1;
        stats.consecutive_failures += 1;

        warn!(
            error = %err,
            consecutive_failures = stats.consecutive_failures,
            "Rate refresh failed, keeping previous rate"
        );
    }
}

#[async_trait]
impl<S: MarkupSource, C: Clock> RateProvider for RateCache<S, C> {
    async fn current(&self) -> RateSnapshot {
        self.current_snapshot().await
    }

    fn peek(&self) -> RateSnapshot {
        self.cached().into()
    }

    fn stats(&self) -> RefreshStats {
        self.refresh_stats()
    }
}
