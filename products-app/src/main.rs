//! # Products Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging (and optional OTLP span export)
//! - Start the exchange-rate refresher
//! - Create the product service
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{ConfigRateSource, MemoryRateCache};
use products_hex::{ProductService, RateRefresher, inbound::HttpServer};
use products_repo::build_repo;

use config::{Config, LogFormat};

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
    Ok((provider.tracer("products-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize OpenTelemetry tracing when a collector is configured
    let otel = match &config.otlp_endpoint {
        Some(_) => Some(init_tracer()?),
        None => None,
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,products_app=debug,products_hex=debug".into()),
        )
        .with(fmt_layer)
        .with(telemetry)
        .init();

    tracing::info!("Starting products server on port {}", config.port);
    tracing::info!(
        "Reading exchange rates from {} every {:?}",
        config.settings_path.display(),
        config.refresh_interval
    );

    // Shared rate cache, filled by the refresher and read by requests
    let cache = Arc::new(MemoryRateCache::new());
    let refresher = RateRefresher::new(ConfigRateSource::new(&config.settings_path), cache.clone())
        .spawn(config.refresh_interval);

    // Create the product service
    let service = ProductService::new(build_repo(), cache);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    let served = server.run(&addr).await;

    refresher.shutdown().await;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    served
}
