//! Panel Page
//!
//! Control-room widgets: radial gauges for the gas channels, a thermometer
//! for temperature, a humidity gauge and LED indicators for light and
//! motion. Uses a smaller window than the charts page; every widget shows
//! the latest reading of the current window.

use leptos::*;

use crate::components::{Led, Loading, RadialGauge, Thermometer};
use crate::state::global::GlobalState;

/// Rows per window on the panel page
const PANEL_CHUNK_SIZE: usize = 15;

/// Panel page component
#[component]
pub fn Panel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The panel variant reads smaller windows
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.set_chunk_size(Some(PANEL_CHUNK_SIZE));
    });

    let state_for_latest = state.clone();
    let latest = create_memo(move |_| state_for_latest.latest());

    let co = Signal::derive(move || latest.get().map(|r| r.co));
    let lpg = Signal::derive(move || latest.get().map(|r| r.lpg));
    let smoke = Signal::derive(move || latest.get().map(|r| r.smoke));
    let humidity = Signal::derive(move || latest.get().map(|r| r.humidity));
    let temp = Signal::derive(move || latest.get().map(|r| r.temp));
    let light = Signal::derive(move || latest.get().map(|r| r.light).unwrap_or(false));
    let motion = Signal::derive(move || latest.get().map(|r| r.motion).unwrap_or(false));

    let state_for_caption = state.clone();

    // Memoized so the widgets are not re-mounted every time a window lands
    let state_for_waiting = state;
    let waiting = create_memo(move |_| {
        state_for_waiting.readings.with(|r| r.is_empty()) && state_for_waiting.loading.get()
    });

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Sensor Panel"</h1>
                    <p class="text-gray-400 mt-1">"Latest reading of the current window"</p>
                </div>

                <div class="text-sm text-gray-400 font-mono">
                    {move || {
                        latest.get()
                            .map(|r| r.device)
                            .unwrap_or_default()
                    }}
                </div>
            </div>

            {move || {
                if waiting.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                            <RadialGauge label="CO" unit="ppm" min=0.0 max=0.02 color="#FF9800" value=co />
                            <RadialGauge label="LPG" unit="ppm" min=0.0 max=0.02 color="#9C27B0" value=lpg />
                            <RadialGauge label="Smoke" unit="ppm" min=0.0 max=0.05 color="#4CAF50" value=smoke />
                            <Thermometer min=0.0 max=40.0 value=temp />
                            <RadialGauge label="Humidity" unit="%" min=0.0 max=100.0 color="#2196F3" value=humidity />
                            <div class="grid grid-rows-2 gap-4">
                                <Led label="Light" on=light />
                                <Led label="Motion" on=motion />
                            </div>
                        </div>
                    }.into_view()
                }
            }}

            // Window caption
            <p class="text-sm text-gray-500">
                {move || {
                    state_for_caption.window_meta.get()
                        .map(|m| format!(
                            "Window {} of {} · {} rows per window",
                            m.index + 1, m.window_count, m.size
                        ))
                        .unwrap_or_default()
                }}
            </p>
        </div>
    }
}
