//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

/// Application configuration.
///
/// The source URL, TTL and fetch timeout are constants of `bcv-rates`,
/// not configuration.
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    /// Export spans over OTLP (set `OTEL_EXPORTER_OTLP_ENDPOINT` to enable)
    pub otlp_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?;

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "./static".to_string())
            .into();

        let otlp_enabled = env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some();

        Ok(Self {
            port,
            static_dir,
            otlp_enabled,
        })
    }
}
