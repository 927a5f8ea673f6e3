//! Dashboard Page
//!
//! Live line charts for every sensor channel, fed by the window the poll
//! loop fetched for the current tick.

use leptos::*;

use crate::components::{ChartGrid, ChartSkeleton};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Charts read windows at the server's default size
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.set_chunk_size(None);
    });

    let state_for_summary = state.clone();

    // Memoized so the grid is not re-mounted every time a window lands
    let state_for_waiting = state.clone();
    let waiting = create_memo(move |_| {
        state_for_waiting.readings.with(|r| r.is_empty()) && state_for_waiting.loading.get()
    });

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Live Telemetry"</h1>
                    <p class="text-gray-400 mt-1">"Real time IoT device data monitor"</p>
                </div>

                // Dataset summary
                <div class="text-sm text-gray-400">
                    {move || {
                        state_for_summary.summary.get()
                            .map(|s| format!(
                                "{} rows from {} devices · {} windows of {}",
                                s.rows, s.devices.len(), s.window_count, s.chunk_size
                            ))
                            .unwrap_or_default()
                    }}
                </div>
            </div>

            // Chart grid (skeleton until the first window lands)
            {move || {
                if waiting.get() {
                    view! { <ChartSkeleton /> }.into_view()
                } else {
                    view! { <ChartGrid /> }.into_view()
                }
            }}

            <RecentReadings />
        </div>
    }
}

/// The tail of the current window as a small table
#[component]
fn RecentReadings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Latest Readings"</h2>

            <div class="space-y-2">
                {move || {
                    let readings = state.readings.get();
                    let recent: Vec<_> = readings.iter().rev().take(5).rev().cloned().collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No readings yet"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|r| {
                            let time = chrono::DateTime::from_timestamp_millis(r.ts)
                                .map(|dt| dt.format("%H:%M:%S").to_string())
                                .unwrap_or_default();

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0 text-sm">
                                    <span class="text-gray-400" title=r.time.clone()>{time}</span>
                                    <span class="font-mono text-gray-300">{r.device.clone()}</span>
                                    <span>{format!("{:.1} °C", r.temp)}</span>
                                    <span>{format!("{:.1} %", r.humidity)}</span>
                                    <span class="text-gray-400">{format!("co {:.4}", r.co)}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
