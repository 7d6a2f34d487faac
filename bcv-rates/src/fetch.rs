//! HTTP adapter for the [`MarkupSource`] port.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use bcv_types::{FetchError, MarkupSource};

/// Page publishing the official rate.
pub const BCV_URL: &str = "https://www.bcv.org.ve/";

/// Upper bound for a single fetch, connection and body included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("bcv-rates/", env!("CARGO_PKG_VERSION"));

/// Fetches page markup with a single GET, no retries.
pub struct HttpMarkupSource {
    url: String,
    http: reqwest::Client,
}

impl HttpMarkupSource {
    /// Source pointed at [`BCV_URL`].
    pub fn bcv() -> Result<Self, FetchError> {
        Self::new(BCV_URL)
    }

    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[async_trait]
impl MarkupSource for HttpMarkupSource {
    #[instrument(name = "BcvFetch", skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self.http.get(&self.url).send().await.map_err(classify)?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "Received source page");
        } else {
            warn!(%status, "Source answered with an error status, parsing body anyway");
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}
