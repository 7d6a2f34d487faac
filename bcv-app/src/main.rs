//! # BCV Rate Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the scraping rate cache
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bcv_hex::{ConversionService, inbound::HttpServer};
use bcv_rates::{BCV_URL, HttpMarkupSource, RATE_TTL_MINUTES, RateCache};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("bcv-rate-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // OpenTelemetry export is opt-in
    let otel = if config.otlp_enabled {
        Some(init_tracer()?)
    } else {
        None
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bcv_app=debug,bcv_hex=debug,bcv_rates=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting BCV rate server on port {}", config.port);
    tracing::info!(
        source = BCV_URL,
        ttl_minutes = RATE_TTL_MINUTES,
        "Rate is scraped on demand"
    );
    tracing::info!("Serving static files from {}", config.static_dir.display());

    // Rate cache starts empty; the first request triggers the first fetch
    let rates = RateCache::new(HttpMarkupSource::bcv()?);

    // Create the conversion service
    let service = ConversionService::new(rates);

    // Create and run the HTTP server
    let server = HttpServer::new(service).with_static_dir(&config.static_dir);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
