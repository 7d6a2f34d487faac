//! # BCV Client SDK
//!
//! A typed Rust client for the BCV rate API.

use bcv_types::{ConversionResponse, HealthResponse, RateResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// BCV rate API client.
pub struct BcvClient {
    base_url: String,
    http: Client,
}

impl BcvClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Returns the refresh health of the API.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get("/health", &[]).await
    }

    /// Gets the current rate.
    pub async fn rate(&self) -> Result<RateResponse, ClientError> {
        self.get("/api/rate", &[]).await
    }

    /// Converts US dollars to bolívares.
    pub async fn to_local(&self, usd: f64) -> Result<ConversionResponse, ClientError> {
        self.get("/api/to-bs", &[("usd", usd.to_string())]).await
    }

    /// Converts bolívares to US dollars.
    pub async fn to_usd(&self, bs: f64) -> Result<ConversionResponse, ClientError> {
        self.get("/api/to-usd", &[("bs", bs.to_string())]).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
