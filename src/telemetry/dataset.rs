//! Telemetry Dataset
//!
//! Loads the sensor telemetry table once at startup and holds it as an
//! ordered, immutable record vector. Row order is preserved from the source
//! file and never re-sorted. Malformed rows fail the load with their line
//! number, so request-time serving never observes bad data.

use std::io::Read;
use std::path::Path;

use super::error::{TelemetryError, TelemetryResult};
use super::types::SensorRecord;

/// Column header the source file must carry, in order.
pub const EXPECTED_HEADER: &[&str] = &[
    "ts", "device", "co", "humidity", "light", "lpg", "motion", "smoke", "temp",
];

/// The full, ordered, immutable table of sensor readings.
#[derive(Debug, Clone)]
pub struct TelemetryDataset {
    records: Vec<SensorRecord>,
}

impl TelemetryDataset {
    /// Load a dataset from a CSV file.
    pub fn load(path: &Path) -> TelemetryResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| TelemetryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(file)
    }

    /// Load a dataset from any reader (useful for tests).
    pub fn from_reader<R: Read>(reader: R) -> TelemetryResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| TelemetryError::Row { line: 1, source: e })?
            .clone();

        if headers.iter().ne(EXPECTED_HEADER.iter().copied()) {
            return Err(TelemetryError::Header {
                expected: EXPECTED_HEADER,
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let mut records = Vec::new();
        for result in reader.deserialize::<SensorRecord>() {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    return Err(TelemetryError::Row { line, source: e });
                }
            }
        }

        Ok(Self { records })
    }

    /// Build a dataset directly from records (tests and benches).
    pub fn from_records(records: Vec<SensorRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    /// Number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct device ids, in first-seen order.
    pub fn devices(&self) -> Vec<String> {
        let mut devices: Vec<String> = Vec::new();
        for record in &self.records {
            if !devices.iter().any(|d| d == &record.device) {
                devices.push(record.device.clone());
            }
        }
        devices
    }

    /// Timestamp of the first row.
    pub fn first_ts(&self) -> Option<i64> {
        self.records.first().map(|r| r.ts)
    }

    /// Timestamp of the last row.
    pub fn last_ts(&self) -> Option<i64> {
        self.records.last().map(|r| r.ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ts,device,co,humidity,light,lpg,motion,smoke,temp
1594512000000,b8:27:eb:bf:9d:51,0.0049,51.0,false,0.0076,false,0.0204,22.7
1594512003000,b8:27:eb:bf:9d:51,0.0050,50.9,false,0.0077,true,0.0205,22.6
1594512006000,00:0f:00:70:91:0a,0.0028,76.0,true,0.0050,false,0.0134,19.7
";

    #[test]
    fn test_load_preserves_order() {
        let dataset = TelemetryDataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].ts, 1_594_512_000_000);
        assert_eq!(dataset.records()[2].ts, 1_594_512_006_000);
        assert_eq!(dataset.first_ts(), Some(1_594_512_000_000));
        assert_eq!(dataset.last_ts(), Some(1_594_512_006_000));
    }

    #[test]
    fn test_bool_and_numeric_fields() {
        let dataset = TelemetryDataset::from_reader(SAMPLE.as_bytes()).unwrap();

        let row = &dataset.records()[2];
        assert!(row.light);
        assert!(!row.motion);
        assert_eq!(row.humidity, 76.0);
        assert_eq!(row.device, "00:0f:00:70:91:0a");
    }

    #[test]
    fn test_devices_first_seen_order() {
        let dataset = TelemetryDataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            dataset.devices(),
            vec![
                "b8:27:eb:bf:9d:51".to_string(),
                "00:0f:00:70:91:0a".to_string()
            ]
        );
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let bad = "\
ts,device,co,humidity,light,lpg,motion,smoke,temp
1594512000000,b8:27:eb:bf:9d:51,0.0049,51.0,false,0.0076,false,0.0204,22.7
1594512003000,b8:27:eb:bf:9d:51,not-a-number,50.9,false,0.0077,true,0.0205,22.6
";

        let err = TelemetryDataset::from_reader(bad.as_bytes()).unwrap_err();
        match err {
            TelemetryError::Row { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Row error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_boolean_rejected() {
        let bad = "\
ts,device,co,humidity,light,lpg,motion,smoke,temp
1594512000000,b8:27:eb:bf:9d:51,0.0049,51.0,maybe,0.0076,false,0.0204,22.7
";

        let err = TelemetryDataset::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, TelemetryError::Row { line: 2, .. }));
    }

    #[test]
    fn test_header_mismatch() {
        let bad = "time,device,co\n1,a,2\n";

        let err = TelemetryDataset::from_reader(bad.as_bytes()).unwrap_err();
        match err {
            TelemetryError::Header { found, .. } => {
                assert_eq!(found[0], "time");
            }
            other => panic!("expected Header error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_empty_dataset() {
        let empty = "ts,device,co,humidity,light,lpg,motion,smoke,temp\n";
        let dataset = TelemetryDataset::from_reader(empty.as_bytes()).unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.first_ts(), None);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SAMPLE.as_bytes())
            .unwrap();

        let dataset = TelemetryDataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TelemetryDataset::load(Path::new("/nonexistent/telemetry.csv")).unwrap_err();
        assert!(matches!(err, TelemetryError::Io { .. }));
    }
}
