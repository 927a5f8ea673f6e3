//! IoTWatch CLI
//!
//! Inspect a telemetry dataset from the command line: print its metadata,
//! dump a single window, or walk every window to verify the partition.

use anyhow::Context;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use iotwatch::telemetry::{window, window_count, windows, SensorRecord, TelemetryDataset};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iotwatch-cli", version, about = "Inspect IoT telemetry datasets")]
struct Cli {
    /// Path to the telemetry CSV file
    #[arg(short, long, default_value = "data/iot_telemetry.csv")]
    dataset: PathBuf,

    /// Rows per window
    #[arg(short, long, default_value_t = 25)]
    chunk_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print dataset metadata
    Summary,
    /// Print the n-th window as a table
    Window {
        /// 0-based window index
        n: usize,
    },
    /// Walk every window and verify the partition covers the dataset
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dataset = TelemetryDataset::load(&cli.dataset)
        .with_context(|| format!("failed to load dataset from {:?}", cli.dataset))?;

    match cli.command {
        Command::Summary => summary(&dataset, cli.chunk_size),
        Command::Window { n } => {
            let rows = window(&dataset, cli.chunk_size, n)?;
            print_window(n, rows);
        }
        Command::Check => check(&dataset, cli.chunk_size)?,
    }

    Ok(())
}

fn summary(dataset: &TelemetryDataset, chunk_size: usize) {
    println!("rows:       {}", dataset.len());
    println!("devices:    {}", dataset.devices().join(", "));
    println!("chunk size: {}", chunk_size);
    println!(
        "windows:    {}",
        window_count(dataset.len(), chunk_size)
    );
    println!(
        "first:      {}",
        dataset.first_ts().map(format_ts).unwrap_or_default()
    );
    println!(
        "last:       {}",
        dataset.last_ts().map(format_ts).unwrap_or_default()
    );
}

fn print_window(n: usize, rows: &[SensorRecord]) {
    println!("window {} ({} rows)", n, rows.len());
    println!(
        "{:<20} {:<18} {:>8} {:>8} {:>8} {:>8} {:>6} {:>6} {:>6}",
        "time", "device", "co", "humidity", "lpg", "smoke", "temp", "light", "motion"
    );
    for row in rows {
        println!(
            "{:<20} {:<18} {:>8.4} {:>8.1} {:>8.4} {:>8.4} {:>6.1} {:>6} {:>6}",
            format_ts(row.ts),
            row.device,
            row.co,
            row.humidity,
            row.lpg,
            row.smoke,
            row.temp,
            row.light,
            row.motion
        );
    }
}

fn check(dataset: &TelemetryDataset, chunk_size: usize) -> anyhow::Result<()> {
    let mut covered = 0;
    let mut count = 0;

    for rows in windows(dataset, chunk_size)? {
        anyhow::ensure!(
            rows.len() == chunk_size || covered + rows.len() == dataset.len(),
            "window {} has {} rows but is not the final window",
            count,
            rows.len()
        );
        covered += rows.len();
        count += 1;
    }

    anyhow::ensure!(
        covered == dataset.len(),
        "windows cover {} of {} rows",
        covered,
        dataset.len()
    );

    println!(
        "ok: {} windows of {} rows cover all {} rows",
        count,
        chunk_size,
        dataset.len()
    );
    Ok(())
}

fn format_ts(ts: i64) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
