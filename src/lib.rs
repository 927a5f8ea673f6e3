//! # IoTWatch
//!
//! Real-time IoT monitoring - a full-stack Rust application that serves a
//! fixed table of sensor telemetry to a live-updating browser dashboard.
//!
//! ## How it works
//!
//! - **Load once**: the telemetry CSV is read at startup into an ordered,
//!   immutable dataset
//! - **Window per tick**: the dashboard's interval timer selects consecutive
//!   fixed-size windows of readings by index
//! - **Pure selection**: window lookup is direct index arithmetic with a
//!   typed error once the counter outruns the data
//! - **Small REST surface**: Axum serves the dataset summary and windows to
//!   the WASM frontend in `iotwatch-ui/`
//!
//! ## Modules
//!
//! - [`telemetry`]: dataset model, CSV loading, window selection
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iotwatch::telemetry::{window, TelemetryDataset};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the telemetry table once
//!     let dataset = TelemetryDataset::load(Path::new("data/iot_telemetry.csv"))?;
//!
//!     // Tick 0 shows the first 25 readings
//!     let first = window(&dataset, 25, 0)?;
//!     println!("first window holds {} readings", first.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod telemetry;

// Re-export top-level types for convenience
pub use telemetry::{
    window, window_count, windows, SensorRecord, TelemetryDataset, TelemetryError,
    TelemetryResult,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, DatasetConfig, LoggingConfig,
};
