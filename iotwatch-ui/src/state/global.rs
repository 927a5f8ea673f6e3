//! Global Application State
//!
//! Reactive state management using Leptos signals. The poll loop writes the
//! current window here; pages and widgets only read.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Dataset summary fetched once at startup
    pub summary: RwSignal<Option<DatasetSummary>>,
    /// Readings of the window shown for the current tick
    pub readings: RwSignal<Vec<Reading>>,
    /// Position of the shown window within the dataset
    pub window_meta: RwSignal<Option<WindowMeta>>,
    /// Next window index the poll loop will request
    pub tick: RwSignal<usize>,
    /// Per-page window size override (None = server default)
    pub chunk_size: RwSignal<Option<usize>>,
    /// Whether the poll loop is advancing, paused, or out of data
    pub run_state: RwSignal<RunState>,
    /// Timestamp of the last successful fetch
    pub last_update: RwSignal<Option<i64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Dataset summary from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub devices: Vec<String>,
    pub chunk_size: usize,
    pub window_count: usize,
    pub poll_interval_ms: u64,
}

/// A single sensor reading from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reading {
    /// Milliseconds since the Unix epoch
    pub ts: i64,
    /// Calendar form of `ts` (RFC 3339)
    #[serde(default)]
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

/// Position of the shown window within the dataset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowMeta {
    pub index: usize,
    pub size: usize,
    pub window_count: usize,
    pub last: bool,
}

/// Poll loop run state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The interval timer is advancing the tick counter
    Running,
    /// The user paused the stream; ticks are skipped
    Paused,
    /// The tick counter outran the dataset; the stream is over
    Exhausted,
}

/// A numeric sensor channel of a reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Co,
    Humidity,
    Temp,
    Lpg,
    Smoke,
}

impl Channel {
    /// Extract this channel's value from a reading
    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            Channel::Co => reading.co,
            Channel::Humidity => reading.humidity,
            Channel::Temp => reading.temp,
            Channel::Lpg => reading.lpg,
            Channel::Smoke => reading.smoke,
        }
    }
}

/// Extract one channel as (timestamp, value) points, in window order
pub fn series(readings: &[Reading], channel: Channel) -> Vec<(i64, f64)> {
    readings.iter().map(|r| (r.ts, channel.value(r))).collect()
}

/// Count readings where `is_on` holds vs. where it does not
pub fn on_off_counts<F>(readings: &[Reading], is_on: F) -> (usize, usize)
where
    F: Fn(&Reading) -> bool,
{
    let on = readings.iter().filter(|r| is_on(r)).count();
    (on, readings.len() - on)
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        summary: create_rw_signal(None),
        readings: create_rw_signal(Vec::new()),
        window_meta: create_rw_signal(None),
        tick: create_rw_signal(0),
        chunk_size: create_rw_signal(None),
        run_state: create_rw_signal(RunState::Running),
        last_update: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// The most recent reading of the shown window
    pub fn latest(&self) -> Option<Reading> {
        self.readings.get().last().cloned()
    }

    /// Switch the window size a page wants (None = server default) and
    /// restart the stream from the first window. Window indexes are only
    /// meaningful for one partition size, so the tick counter resets.
    pub fn set_chunk_size(&self, size: Option<usize>) {
        if self.chunk_size.get_untracked() == size {
            return;
        }
        self.chunk_size.set(size);
        self.restart();
    }

    /// Rewind the stream to the first window and resume ticking
    pub fn restart(&self) {
        self.tick.set(0);
        self.window_meta.set(None);
        self.run_state.set(RunState::Running);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(i: i64, light: bool, motion: bool) -> Reading {
        Reading {
            ts: 1_594_512_000_000 + i * 3_000,
            time: String::new(),
            device: "b8:27:eb:bf:9d:51".to_string(),
            co: 0.004 + i as f64 * 0.001,
            humidity: 50.0 + i as f64,
            light,
            lpg: 0.0076,
            motion,
            smoke: 0.0204,
            temp: 22.0,
        }
    }

    #[test]
    fn test_series_preserves_window_order() {
        let readings = vec![reading(0, false, false), reading(1, true, false)];

        let points = series(&readings, Channel::Co);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].0, 1_594_512_000_000);
        assert!(points[0].1 < points[1].1);
    }

    #[test]
    fn test_channel_value() {
        let r = reading(2, false, false);
        assert_eq!(Channel::Humidity.value(&r), 52.0);
        assert_eq!(Channel::Temp.value(&r), 22.0);
        assert_eq!(Channel::Smoke.value(&r), 0.0204);
    }

    #[test]
    fn test_on_off_counts() {
        let readings = vec![
            reading(0, true, false),
            reading(1, false, true),
            reading(2, true, true),
        ];

        assert_eq!(on_off_counts(&readings, |r| r.light), (2, 1));
        assert_eq!(on_off_counts(&readings, |r| r.motion), (2, 1));
        assert_eq!(on_off_counts(&[], |r| r.light), (0, 0));
    }
}
