//! # BCV Hex
//!
//! Application service layer and HTTP adapter for the rate service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (amount validation, conversions)
//! - `inbound/` - HTTP adapter (Axum server, static files)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `R: RateProvider`, allowing
//! different rate sources to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ConversionService;
