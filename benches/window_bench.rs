use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iotwatch::telemetry::{window, SensorRecord, TelemetryDataset};

fn synthetic_dataset(rows: usize) -> TelemetryDataset {
    let records = (0..rows)
        .map(|i| SensorRecord {
            ts: 1_594_512_000_000 + (i as i64) * 3_000,
            device: "b8:27:eb:bf:9d:51".to_string(),
            co: 0.0049,
            humidity: 51.0,
            light: false,
            lpg: 0.0076,
            motion: false,
            smoke: 0.0204,
            temp: 22.7,
        })
        .collect();
    TelemetryDataset::from_records(records)
}

/// Selection cost must not grow with the window index: the first and the
/// last window of a large dataset should bench identically.
fn bench_window_selection(c: &mut Criterion) {
    let dataset = synthetic_dataset(100_000);
    let last = 100_000 / 25 - 1;

    c.bench_function("window_first", |b| {
        b.iter(|| window(black_box(&dataset), 25, 0).unwrap())
    });

    c.bench_function("window_last", |b| {
        b.iter(|| window(black_box(&dataset), 25, black_box(last)).unwrap())
    });
}

criterion_group!(benches, bench_window_selection);
criterion_main!(benches);
