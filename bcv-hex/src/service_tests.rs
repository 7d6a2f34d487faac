//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use bcv_types::{AppError, HealthStatus, RateProvider, RateSnapshot, RefreshStats};

    use crate::ConversionService;

    /// Fixed-rate provider that counts reads.
    pub struct MockRates {
        snapshot: Mutex<RateSnapshot>,
        stats: RefreshStats,
        reads: AtomicUsize,
    }

    impl MockRates {
        pub fn with_rate(value: f64) -> Self {
            Self {
                snapshot: Mutex::new(RateSnapshot {
                    value,
                    updated_at: Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
                }),
                stats: RefreshStats {
                    attempts: 1,
                    failures: 0,
                    consecutive_failures: 0,
                    last_success: Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
                },
                reads: AtomicUsize::new(0),
            }
        }

        pub fn empty() -> Self {
            Self {
                snapshot: Mutex::new(RateSnapshot::default()),
                stats: RefreshStats {
                    attempts: 1,
                    failures: 1,
                    consecutive_failures: 1,
                    last_success: None,
                },
                reads: AtomicUsize::new(0),
            }
        }

        pub fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for MockRates {
        async fn current(&self) -> RateSnapshot {
            self.reads.fetch_add(1, Ordering::SeqCst);
            *self.snapshot.lock().unwrap()
        }

        fn peek(&self) -> RateSnapshot {
            *self.snapshot.lock().unwrap()
        }

        fn stats(&self) -> RefreshStats {
            self.stats
        }
    }

    #[tokio::test]
    async fn test_rate() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let resp = service.rate().await;

        assert_eq!(resp.value, 36.5);
        assert!(!resp.last_updated.is_empty());
        assert_eq!(service.rates().reads(), 1);
    }

    #[tokio::test]
    async fn test_rate_before_first_fetch() {
        let service = ConversionService::new(MockRates::empty());

        let resp = service.rate().await;

        assert_eq!(resp.value, 0.0);
        assert_eq!(resp.last_updated, "");
        assert!(resp.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_to_local() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let resp = service.to_local(Some("100")).await.unwrap();

        assert_eq!(resp.input, 100.0);
        assert_eq!(resp.converted, 3650.0);
        assert_eq!(resp.rate, 36.5);
        assert_eq!(service.rates().reads(), 1);
    }

    #[tokio::test]
    async fn test_to_usd() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let resp = service.to_usd(Some("3650")).await.unwrap();

        assert_eq!(resp.input, 3650.0);
        assert_eq!(resp.converted, 100.0);
        assert_eq!(resp.rate, 36.5);
        assert_eq!(service.rates().reads(), 1);
    }

    #[tokio::test]
    async fn test_zero_amount_allowed() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let resp = service.to_local(Some("0")).await.unwrap();

        assert_eq!(resp.converted, 0.0);
    }

    #[tokio::test]
    async fn test_negative_amount_fails() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let result = service.to_local(Some("-5")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_overflowing_conversion_fails() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        let result = service.to_local(Some("1e308")).await;

        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Invalid amount"));
    }

    #[tokio::test]
    async fn test_invalid_amount_does_not_read_rate() {
        let service = ConversionService::new(MockRates::with_rate(36.5));

        assert!(matches!(
            service.to_usd(Some("abc")).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.to_usd(None).await,
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(service.rates().reads(), 0);
    }

    #[tokio::test]
    async fn test_conversions_without_rate() {
        let service = ConversionService::new(MockRates::empty());

        let to_local = service.to_local(Some("100")).await.unwrap();
        assert_eq!(to_local.converted, 0.0);
        assert_eq!(to_local.rate, 0.0);

        let to_usd = service.to_usd(Some("3650")).await.unwrap();
        assert_eq!(to_usd.converted, 0.0);
        assert_eq!(to_usd.rate, 0.0);
    }

    #[tokio::test]
    async fn test_health() {
        let service = ConversionService::new(MockRates::with_rate(36.5));
        let health = service.health();
        assert_eq!(health.status, HealthStatus::Healthy);
        assert!(health.rate_available);

        let service = ConversionService::new(MockRates::empty());
        let health = service.health();
        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(health.refresh.consecutive_failures, 1);
        assert_eq!(service.rates().reads(), 0);
    }
}
