//! Telemetry Core
//!
//! The dataset model for IoTWatch: an ordered, immutable table of sensor
//! readings loaded once at startup, and the window selection that partitions
//! it into the consecutive fixed-size slices the dashboard consumes.
//!
//! - [`types`]: row-level record type
//! - [`dataset`]: CSV loading and dataset metadata
//! - [`window`]: window selection by tick index
//! - [`error`]: error taxonomy for loading and slicing

pub mod dataset;
pub mod error;
pub mod types;
pub mod window;

pub use dataset::{TelemetryDataset, EXPECTED_HEADER};
pub use error::{TelemetryError, TelemetryResult};
pub use types::SensorRecord;
pub use window::{window, window_count, windows};
