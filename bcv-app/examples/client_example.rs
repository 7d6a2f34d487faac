//! Client example: runs the API against a fixture page and queries it with the SDK.
//!
//! Run with: cargo run -p bcv-app --example client_example

use async_trait::async_trait;
use bcv_client::BcvClient;
use bcv_hex::{ConversionService, inbound::HttpServer};
use bcv_rates::RateCache;
use bcv_types::{FetchError, MarkupSource};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serves a canned copy of the BCV home page instead of hitting the network.
struct FixturePage;

#[async_trait]
impl MarkupSource for FixturePage {
    async fn fetch(&self) -> Result<String, FetchError> {
        Ok(r#"<div id="dolar"><span>USD</span><strong> 36,50000000 </strong></div>"#.into())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    // Start server in background
    let service = ConversionService::new(RateCache::new(FixturePage));
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let client = BcvClient::new(format!("http://127.0.0.1:{port}"));

    let health = client.health().await?;
    println!("Health before first request: {:?}", health.status);

    let rate = client.rate().await?;
    println!("Rate: {} Bs/USD (updated {})", rate.value, rate.last_updated);

    let to_bs = client.to_local(100.0).await?;
    println!("{} USD = {} Bs", to_bs.input, to_bs.converted);

    let to_usd = client.to_usd(3650.0).await?;
    println!("{} Bs = {} USD", to_usd.input, to_usd.converted);

    match client.to_usd(-1.0).await {
        Err(e) => println!("Negative amount rejected: {e}"),
        Ok(resp) => println!("Unexpected success: {resp:?}"),
    }

    let health = client.health().await?;
    println!("Health after first request: {:?}", health.status);

    Ok(())
}
