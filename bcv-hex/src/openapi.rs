//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use bcv_types::domain::{RateSnapshot, RefreshStats};
use bcv_types::dto::{
    ConversionResponse, HealthResponse, HealthStatus, RateResponse, ToLocalQuery, ToUsdQuery,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Refresh path status; never triggers a fetch", body = HealthResponse)
    )
)]
async fn health() {}

/// Current exchange rate
#[utoipa::path(
    get,
    path = "/api/rate",
    tag = "rates",
    responses(
        (status = 200, description = "Bolívares per US dollar, 0 until the first successful fetch", body = RateResponse)
    )
)]
async fn rate() {}

/// Convert US dollars to bolívares
#[utoipa::path(
    get,
    path = "/api/to-bs",
    tag = "conversions",
    params(ToLocalQuery),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (status = 400, description = "Missing, non-numeric or negative amount")
    )
)]
async fn to_local() {}

/// Convert bolívares to US dollars
#[utoipa::path(
    get,
    path = "/api/to-usd",
    tag = "conversions",
    params(ToUsdQuery),
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (status = 400, description = "Missing, non-numeric or negative amount")
    )
)]
async fn to_usd() {}

/// OpenAPI documentation for the rate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BCV Rate Service API",
        version = "1.0.0",
        description = "Official bolívar/dollar rate scraped from the Banco Central de Venezuela home page, cached for 15 minutes.\n\nThe rate endpoints never fail because of the upstream page: when it is unreachable the last known rate is served, or `0` if none was ever fetched.",
        license(name = "MIT"),
    ),
    paths(health, rate, to_local, to_usd),
    components(
        schemas(
            RateResponse,
            ConversionResponse,
            HealthResponse,
            HealthStatus,
            RefreshStats,
            RateSnapshot,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Exchange rate"),
        (name = "conversions", description = "USD/Bs conversions at the current rate"),
    )
)]
pub struct ApiDoc;
