//! Conversion Application Service
//!
//! Orchestrates rate lookups through the provider port.
//! Contains NO infrastructure logic - pure business orchestration.

use bcv_types::{
    Amount, AppError, ConversionResponse, HealthResponse, RateProvider, RateResponse,
};

/// Application service for rate and conversion queries.
///
/// Generic over `R: RateProvider` - the adapter is injected at compile time.
/// Each operation reads the rate exactly once, so the rate echoed back in a
/// response is the one used for the arithmetic.
pub struct ConversionService<R: RateProvider> {
    rates: R,
}

impl<R: RateProvider> ConversionService<R> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(rates: R) -> Self {
        Self { rates }
    }

    /// Returns a reference to the underlying provider.
    pub fn rates(&self) -> &R {
        &self.rates
    }

    /// Current rate and the time it was scraped.
    pub async fn rate(&self) -> RateResponse {
        self.rates.current().await.into()
    }

    /// Converts US dollars to bolívares.
    pub async fn to_local(&self, usd: Option<&str>) -> Result<ConversionResponse, AppError> {
        let usd = parse_amount(usd)?;
        let rate = self.rates.current().await.value;

        Ok(ConversionResponse {
            input: usd.value(),
            converted: usd.to_local(rate)?,
            rate,
        })
    }

    /// Converts bolívares to US dollars.
    pub async fn to_usd(&self, bs: Option<&str>) -> Result<ConversionResponse, AppError> {
        let bs = parse_amount(bs)?;
        let rate = self.rates.current().await.value;

        Ok(ConversionResponse {
            input: bs.value(),
            converted: bs.to_usd(rate)?,
            rate,
        })
    }

    /// Health derived from the cached rate. Never triggers a refresh.
    pub fn health(&self) -> HealthResponse {
        HealthResponse::new(self.rates.peek().is_available(), self.rates.stats())
    }
}

/// Amounts are validated before the rate is read so bad input costs no fetch.
fn parse_amount(raw: Option<&str>) -> Result<Amount, AppError> {
    raw.ok_or_else(|| AppError::BadRequest("Invalid amount".into()))?
        .parse::<Amount>()
        .map_err(Into::into)
}
