//! # BCV Types
//!
//! Domain types and port traits for the BCV exchange rate service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CachedRate, RateSnapshot, Amount)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, CachedRate, RateSnapshot, RefreshStats};
pub use dto::*;
pub use error::{AppError, CandidateRejection, DomainError, ExtractError, RefreshError};
pub use ports::{Clock, FetchError, MarkupSource, RateProvider, SystemClock};
