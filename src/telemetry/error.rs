//! Telemetry Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or slicing the telemetry dataset
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse; reported at load time with its line number
    #[error("malformed row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// The file header does not match the expected telemetry schema
    #[error("dataset header mismatch: expected {expected:?}, found {found:?}")]
    Header {
        expected: &'static [&'static str],
        found: Vec<String>,
    },

    /// Chunk size of zero can never produce a window
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// The requested window index lies past the end of the dataset
    #[error("window {index} out of range: dataset has {available} windows of size {size}")]
    WindowOutOfRange {
        index: usize,
        size: usize,
        available: usize,
    },
}

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;
