//! Markup source port.
//!
//! The rate is scraped from an HTML page. Implementations can be the real
//! HTTP fetcher, fixtures for tests, etc.

use std::sync::Arc;

/// Error type for fetching the source page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Port trait for the page that publishes the rate.
#[async_trait::async_trait]
pub trait MarkupSource: Send + Sync + 'static {
    /// Fetches the raw page markup.
    ///
    /// A non-success HTTP status is not an error: whatever body came back is
    /// returned and left for extraction to judge.
    async fn fetch(&self) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<T: MarkupSource + ?Sized> MarkupSource for Arc<T> {
    async fn fetch(&self) -> Result<String, FetchError> {
        (**self).fetch().await
    }
}
