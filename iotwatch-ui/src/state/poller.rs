//! Poll Loop
//!
//! Drives the dashboard's tick counter on a fixed interval. Each firing
//! fetches the window selected by the counter and advances it; the counter
//! stops for good once the API reports the dataset exhausted.

use gloo_timers::callback::Interval;
use leptos::*;

use super::global::{GlobalState, RunState, WindowMeta};
use crate::api::{self, FetchError};

/// Fallback cadence if the API does not supply one (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 3_000;

/// Startup retries before giving up on the API
const MAX_STARTUP_ATTEMPTS: u32 = 5;

/// Fetch the dataset summary, then start the interval timer with the
/// server's cadence hint. Call once from the app root.
pub fn start_polling(state: GlobalState) {
    start_polling_attempt(state, 0);
}

fn start_polling_attempt(state: GlobalState, attempt: u32) {
    let state_for_async = state.clone();
    spawn_local(async move {
        state_for_async.loading.set(true);

        match api::fetch_summary().await {
            Ok(summary) => {
                let interval_ms = if summary.poll_interval_ms == 0 {
                    DEFAULT_POLL_INTERVAL_MS
                } else {
                    summary.poll_interval_ms.min(u32::MAX as u64) as u32
                };
                state_for_async.summary.set(Some(summary));
                start_interval(state_for_async.clone(), interval_ms);
            }
            Err(e) => {
                state_for_async.show_error(&format!("Failed to reach the API: {}", e));

                // Retry with exponential backoff before giving up
                if attempt < MAX_STARTUP_ATTEMPTS {
                    let delay = (2_u32.pow(attempt) * 1000).min(30_000);
                    let state_for_retry = state_for_async.clone();
                    gloo_timers::callback::Timeout::new(delay, move || {
                        start_polling_attempt(state_for_retry, attempt + 1);
                    })
                    .forget();
                }
            }
        }

        state_for_async.loading.set(false);
    });
}

fn start_interval(state: GlobalState, interval_ms: u32) {
    // Show the first window without waiting a full period
    advance(state.clone());

    let state_for_tick = state.clone();
    Interval::new(interval_ms, move || advance(state_for_tick.clone())).forget();
}

/// One tick: fetch the window the counter selects, then advance the counter.
/// Skipped while paused; terminal once the stream is exhausted.
pub fn advance(state: GlobalState) {
    if state.run_state.get_untracked() != RunState::Running {
        return;
    }

    let n = state.tick.get_untracked();
    let size = state.chunk_size.get_untracked();

    spawn_local(async move {
        match api::fetch_window(n, size).await {
            Ok(window) => {
                state.window_meta.set(Some(WindowMeta {
                    index: window.index,
                    size: window.size,
                    window_count: window.window_count,
                    last: window.last,
                }));
                state.readings.set(window.readings);
                state.tick.set(n + 1);
                state
                    .last_update
                    .set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(FetchError::Exhausted) => {
                if state.run_state.get_untracked() == RunState::Running {
                    state.run_state.set(RunState::Exhausted);
                    state.show_error("Telemetry stream ended: no windows left in the dataset");
                }
            }
            Err(e) => {
                state.show_error(&format!("Failed to fetch window {}: {}", n, e));
            }
        }
    });
}
