//! Scraped BCV Exchange Rate with a Refreshing Cache
//!
//! This library keeps the official bolívar/dollar rate published on the
//! Banco Central de Venezuela home page. The page is fetched at most once per
//! TTL window, the `#dolar strong` element is located, and its
//! Venezuelan-formatted number (`36,50000000`) is normalized and validated.
//!
//! The pipeline, leaf-first:
//! - [`sanitize`] - locale number normalization
//! - [`extract`] - HTML parsing and candidate validation
//! - [`fetch`] - HTTP adapter for the `MarkupSource` port
//! - [`cache`] - freshness policy, coalesced refreshes and failure fallback
//!
//! # Example
//! ```no_run
//! use bcv_rates::{HttpMarkupSource, RateCache};
//!
//! # async fn run() -> Result<(), bcv_types::FetchError> {
//! let cache = RateCache::new(HttpMarkupSource::bcv()?);
//!
//! // Fetches on first use, then serves from memory for 15 minutes.
//! let rate = cache.get_rate().await;
//! println!("1 USD = {rate} Bs");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod extract;
pub mod fetch;
pub mod sanitize;

pub use cache::{RATE_TTL_MINUTES, RateCache};
pub use extract::{RATE_SELECTOR, extract_rate, parse_candidate};
pub use fetch::{BCV_URL, FETCH_TIMEOUT, HttpMarkupSource};
pub use sanitize::sanitize;
