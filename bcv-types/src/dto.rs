//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{RateSnapshot, RefreshStats};

/// Human-readable timestamp layout used by the web page (`dd/mm/YYYY HH:MM:SS`).
pub const LAST_UPDATED_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// ─────────────────────────────────────────────────────────────────────────────
// Query DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query for converting US dollars to bolívares.
///
/// Amounts arrive as raw strings so that malformed input produces the same
/// `400` body as a negative amount.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToLocalQuery {
    /// Amount in US dollars
    #[param(example = "100")]
    pub usd: Option<String>,
}

/// Query for converting bolívares to US dollars.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToUsdQuery {
    /// Amount in bolívares
    #[param(example = "3650")]
    pub bs: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Current exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateResponse {
    /// Bolívares per US dollar, `0` if no rate was ever fetched
    #[schema(example = 36.5)]
    pub value: f64,
    /// Time of the last successful refresh in server local time, empty if never
    #[schema(example = "01/03/2025 12:00:00")]
    pub last_updated: String,
    /// Time of the last successful refresh (RFC 3339)
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RateSnapshot> for RateResponse {
    fn from(snapshot: RateSnapshot) -> Self {
        Self {
            value: snapshot.value,
            last_updated: snapshot
                .updated_at
                .map(|ts| ts.with_timezone(&Local).format(LAST_UPDATED_FORMAT).to_string())
                .unwrap_or_default(),
            updated_at: snapshot.updated_at,
        }
    }
}

/// Result of a conversion in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    /// Amount supplied by the caller
    #[schema(example = 100.0)]
    pub input: f64,
    /// Converted amount
    #[schema(example = 3650.0)]
    pub converted: f64,
    /// Rate used for the conversion
    #[schema(example = 36.5)]
    pub rate: f64,
}

/// Service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Whether a rate has been fetched at least once
    pub rate_available: bool,
    pub refresh: RefreshStats,
}

impl HealthResponse {
    /// Degraded when no rate exists yet or the last refresh attempt failed.
    pub fn new(rate_available: bool, refresh: RefreshStats) -> Self {
        let status = if rate_available && !refresh.is_failing() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        Self {
            status,
            rate_available,
            refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rate_response_without_rate() {
        let resp = RateResponse::from(RateSnapshot::default());
        assert_eq!(resp.value, 0.0);
        assert_eq!(resp.last_updated, "");
        assert!(resp.updated_at.is_none());
    }

    #[test]
    fn test_rate_response_formats_timestamp() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let resp = RateResponse::from(RateSnapshot {
            value: 36.5,
            updated_at: Some(ts),
        });
        let expected = ts.with_timezone(&Local).format("%d/%m/%Y %H:%M:%S").to_string();
        assert_eq!(resp.last_updated, expected);
        assert_eq!(resp.updated_at, Some(ts));
    }

    #[test]
    fn test_conversion_response_json_shape() {
        let resp = ConversionResponse {
            input: 100.0,
            converted: 3650.0,
            rate: 36.5,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "input": 100.0, "converted": 3650.0, "rate": 36.5 })
        );
    }

    #[test]
    fn test_health_status() {
        let ok = RefreshStats {
            attempts: 1,
            ..Default::default()
        };
        assert_eq!(HealthResponse::new(true, ok).status, HealthStatus::Healthy);
        assert_eq!(HealthResponse::new(false, ok).status, HealthStatus::Degraded);

        let failing = RefreshStats {
            attempts: 2,
            failures: 1,
            consecutive_failures: 1,
            last_success: None,
        };
        assert_eq!(
            HealthResponse::new(true, failing).status,
            HealthStatus::Degraded
        );
    }
}
