//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::telemetry::SensorRecord;

// ============================================
// WINDOW DTOs
// ============================================

/// Query parameters for window selection
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Rows per window; defaults to the server's configured chunk size
    #[serde(default)]
    pub size: Option<usize>,
}

/// One sensor reading as served to the dashboard
#[derive(Debug, Serialize)]
pub struct ReadingDto {
    /// Milliseconds since the Unix epoch
    pub ts: i64,
    /// Calendar form of `ts` (RFC 3339), ready for chart axes
    pub time: String,
    pub device: String,
    pub co: f64,
    pub humidity: f64,
    pub light: bool,
    pub lpg: f64,
    pub motion: bool,
    pub smoke: f64,
    pub temp: f64,
}

impl From<&SensorRecord> for ReadingDto {
    fn from(record: &SensorRecord) -> Self {
        Self {
            ts: record.ts,
            time: record
                .timestamp()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
            device: record.device.clone(),
            co: record.co,
            humidity: record.humidity,
            light: record.light,
            lpg: record.lpg,
            motion: record.motion,
            smoke: record.smoke,
            temp: record.temp,
        }
    }
}

/// Response for a single window request
#[derive(Debug, Serialize)]
pub struct WindowResponse {
    /// Window index requested
    pub index: usize,
    /// Rows per window used for the partition
    pub size: usize,
    /// First row of the window (inclusive)
    pub start_row: usize,
    /// One past the last row of the window
    pub end_row: usize,
    /// Total rows in the dataset
    pub total_rows: usize,
    /// Total windows at this size
    pub window_count: usize,
    /// Whether this is the final window
    pub last: bool,
    /// The readings, in source order
    pub readings: Vec<ReadingDto>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset summary served to the dashboard at startup
#[derive(Debug, Serialize)]
pub struct DatasetSummaryResponse {
    /// Total rows in the dataset
    pub rows: usize,
    /// Distinct device ids, in first-seen order
    pub devices: Vec<String>,
    /// Timestamp of the first row (ms since epoch)
    pub first_ts: Option<i64>,
    /// Timestamp of the last row (ms since epoch)
    pub last_ts: Option<i64>,
    /// Default rows per window
    pub chunk_size: usize,
    /// Windows available at the default chunk size
    pub window_count: usize,
    /// Cadence hint for the dashboard's tick timer (ms)
    pub poll_interval_ms: u64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Dataset status: ok or empty
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
