//! Window Selection
//!
//! Partitions the dataset into consecutive, non-overlapping windows of a
//! fixed row count and selects one by index. The dashboard's tick counter
//! maps directly to the window index: tick `n` shows window `n`.
//!
//! Selection is direct index arithmetic into the record vector, so picking
//! window 10,000 costs the same as picking window 0. An index at or past the
//! end of the dataset is a typed error, never a silent empty slice.

use super::dataset::TelemetryDataset;
use super::error::{TelemetryError, TelemetryResult};
use super::types::SensorRecord;

/// Number of whole-or-partial windows a dataset of `len` rows yields at
/// `size` rows per window. Zero-size chunks yield zero windows.
pub fn window_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

/// Select the `n`-th consecutive window of `size` rows.
///
/// Windows cover rows `[n*size, min((n+1)*size, len))`, in source order. The
/// final window may be shorter than `size` when the dataset length is not a
/// multiple of it. The call is pure: no state advances, and repeated calls
/// with equal arguments return the identical slice.
pub fn window(
    dataset: &TelemetryDataset,
    size: usize,
    n: usize,
) -> TelemetryResult<&[SensorRecord]> {
    if size == 0 {
        return Err(TelemetryError::InvalidChunkSize);
    }

    let len = dataset.len();
    let start = n
        .checked_mul(size)
        .filter(|&start| start < len)
        .ok_or(TelemetryError::WindowOutOfRange {
            index: n,
            size,
            available: window_count(len, size),
        })?;
    let end = (start + size).min(len);

    Ok(&dataset.records()[start..end])
}

/// Iterate every window in order. Used to verify that the windows partition
/// the dataset exactly.
pub fn windows(
    dataset: &TelemetryDataset,
    size: usize,
) -> TelemetryResult<impl Iterator<Item = &[SensorRecord]>> {
    if size == 0 {
        return Err(TelemetryError::InvalidChunkSize);
    }
    Ok(dataset.records().chunks(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: usize) -> TelemetryDataset {
        let records = (0..rows)
            .map(|i| SensorRecord {
                ts: 1_594_512_000_000 + (i as i64) * 3_000,
                device: "b8:27:eb:bf:9d:51".to_string(),
                co: 0.004 + i as f64 * 1e-5,
                humidity: 50.0,
                light: i % 2 == 0,
                lpg: 0.0076,
                motion: false,
                smoke: 0.0204,
                temp: 22.0,
            })
            .collect();
        TelemetryDataset::from_records(records)
    }

    #[test]
    fn test_window_rows_in_order() {
        let data = dataset(40);

        let first = window(&data, 15, 0).unwrap();
        assert_eq!(first.len(), 15);
        assert_eq!(first[0].ts, data.records()[0].ts);
        assert_eq!(first[14].ts, data.records()[14].ts);

        let second = window(&data, 15, 1).unwrap();
        assert_eq!(second.len(), 15);
        assert_eq!(second[0].ts, data.records()[15].ts);
    }

    #[test]
    fn test_final_window_is_short() {
        let data = dataset(40);

        let last = window(&data, 15, 2).unwrap();
        assert_eq!(last.len(), 10);
        assert_eq!(last[0].ts, data.records()[30].ts);
        assert_eq!(last[9].ts, data.records()[39].ts);
    }

    #[test]
    fn test_window_is_idempotent() {
        let data = dataset(40);

        let a = window(&data, 15, 1).unwrap().to_vec();
        let b = window(&data, 15, 1).unwrap().to_vec();
        assert_eq!(a, b);
        assert_eq!(data.len(), 40);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let data = dataset(40);

        let err = window(&data, 15, 3).unwrap_err();
        match err {
            TelemetryError::WindowOutOfRange {
                index,
                size,
                available,
            } => {
                assert_eq!(index, 3);
                assert_eq!(size, 15);
                assert_eq!(available, 3);
            }
            other => panic!("expected WindowOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_has_no_windows() {
        let data = dataset(0);

        let err = window(&data, 15, 0).unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::WindowOutOfRange { available: 0, .. }
        ));
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let data = dataset(40);

        assert!(matches!(
            window(&data, 0, 0),
            Err(TelemetryError::InvalidChunkSize)
        ));
        assert!(windows(&data, 0).is_err());
    }

    #[test]
    fn test_huge_index_does_not_overflow() {
        let data = dataset(40);

        let err = window(&data, 15, usize::MAX).unwrap_err();
        assert!(matches!(err, TelemetryError::WindowOutOfRange { .. }));
    }

    #[test]
    fn test_window_count() {
        assert_eq!(window_count(40, 15), 3);
        assert_eq!(window_count(40, 25), 2);
        assert_eq!(window_count(40, 40), 1);
        assert_eq!(window_count(40, 41), 1);
        assert_eq!(window_count(0, 15), 0);
        assert_eq!(window_count(40, 0), 0);
    }

    #[test]
    fn test_windows_partition_the_dataset() {
        let data = dataset(40);

        let rebuilt: Vec<_> = windows(&data, 15)
            .unwrap()
            .flatten()
            .cloned()
            .collect();
        assert_eq!(rebuilt, data.records());

        let sizes: Vec<_> = windows(&data, 15).unwrap().map(|w| w.len()).collect();
        assert_eq!(sizes, vec![15, 15, 10]);
    }
}
