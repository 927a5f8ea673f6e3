//! Telemetry Record Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single sensor reading, one row of the source table.
///
/// Field names match the source header:
/// `ts,device,co,humidity,light,lpg,motion,smoke,temp`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Milliseconds since the Unix epoch
    pub ts: i64,
    /// Device identifier (a MAC address in the source data)
    pub device: String,
    /// Carbon monoxide level
    pub co: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Light on/off, serialized as `"true"`/`"false"` in the source
    #[serde(deserialize_with = "bool_from_str")]
    pub light: bool,
    /// Liquefied petroleum gas level
    pub lpg: f64,
    /// Motion detected
    #[serde(deserialize_with = "bool_from_str")]
    pub motion: bool,
    /// Smoke level
    pub smoke: f64,
    /// Temperature (degrees Celsius)
    pub temp: f64,
}

impl SensorRecord {
    /// Calendar timestamp for this reading, if `ts` is within chrono's range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.ts)
    }
}

/// The source file writes booleans as the strings `true`/`false`; some
/// exports use `1`/`0` instead. Accept both, case-insensitively.
fn bool_from_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_conversion() {
        let record = SensorRecord {
            ts: 1_594_512_000_000,
            device: "b8:27:eb:bf:9d:51".to_string(),
            co: 0.0049,
            humidity: 51.0,
            light: false,
            lpg: 0.0076,
            motion: false,
            smoke: 0.0204,
            temp: 22.7,
        };

        let dt = record.timestamp().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_594_512_000_000);
    }
}
