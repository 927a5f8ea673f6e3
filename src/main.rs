//! IoTWatch API Server
//!
//! Run with: cargo run --bin iotwatch
//!
//! # Configuration
//!
//! Loaded from config.toml (or the platform config dir) with environment
//! overrides:
//! - `IOTWATCH_DATASET`: Telemetry CSV file (default: data/iot_telemetry.csv)
//! - `IOTWATCH_CHUNK_SIZE`: Rows per window (default: 25)
//! - `IOTWATCH_POLL_INTERVAL_MS`: Dashboard tick cadence hint (default: 3000)
//! - `IOTWATCH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `IOTWATCH_API_PORT`: Port to listen on (default: 8082)
//! - `RUST_LOG`: Log filter (default: iotwatch=<configured level>)

use anyhow::Context;
use iotwatch::api::{serve, ApiConfig, AppState};
use iotwatch::config::{Config, LoggingConfig};
use iotwatch::telemetry::{window_count, TelemetryDataset};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting IoTWatch API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset file: {}", config.dataset.path);

    // Load the telemetry table once; everything served afterwards is a pure
    // view into it
    let dataset = TelemetryDataset::load(Path::new(&config.dataset.path))
        .with_context(|| format!("failed to load dataset from {}", config.dataset.path))?;

    tracing::info!(
        rows = dataset.len(),
        devices = dataset.devices().len(),
        windows = window_count(dataset.len(), config.dataset.chunk_size),
        chunk_size = config.dataset.chunk_size,
        "Dataset loaded"
    );

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        default_chunk_size: config.dataset.chunk_size,
        poll_interval_ms: config.dataset.poll_interval_ms,
    };

    let state = AppState::new(Arc::new(dataset), api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("IoTWatch API server stopped");
    Ok(())
}

/// Initialize tracing per the logging config (pretty for development,
/// JSON for production)
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("iotwatch={},tower_http=info", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
