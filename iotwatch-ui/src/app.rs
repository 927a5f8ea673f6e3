//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Panel, UnderDevelopment};
use crate::state::global::{provide_global_state, GlobalState, RunState};
use crate::state::poller::start_polling;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Start the poll loop that owns the tick counter
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    start_polling(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/panel" view=Panel />
                        <Route
                            path="/predictions"
                            view=|| {
                                view! {
                                    <UnderDevelopment
                                        title="Predictions"
                                        note="Forecasting for sensor channels is under development."
                                    />
                                }
                            }
                        />
                        <Route
                            path="/bigquery"
                            view=|| {
                                view! {
                                    <UnderDevelopment
                                        title="BigQuery Actions"
                                        note="Warehouse export to BigQuery is under development."
                                    />
                                }
                            }
                        />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with stream status and controls
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing stream status and poll controls
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_status = state.clone();
    let state_for_position = state.clone();
    let state_for_update = state.clone();
    let state_for_loading = state.clone();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Stream status + controls
                <div class="flex items-center space-x-3">
                    {move || {
                        match state_for_status.run_state.get() {
                            RunState::Running => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view(),
                            RunState::Paused => view! {
                                <span class="flex items-center space-x-1 text-yellow-400">
                                    <span class="w-2 h-2 bg-yellow-400 rounded-full" />
                                    <span>"Paused"</span>
                                </span>
                            }.into_view(),
                            RunState::Exhausted => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Stream ended"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                    <PollControls />
                </div>

                // Window position
                <div class="text-gray-400">
                    {move || {
                        state_for_position.window_meta.get()
                            .map(|m| {
                                if m.last {
                                    format!("Window {} of {} (final)", m.index + 1, m.window_count)
                                } else {
                                    format!("Window {} of {}", m.index + 1, m.window_count)
                                }
                            })
                            .unwrap_or_else(|| "No window yet".to_string())
                    }}
                </div>

                // Last update / loading indicator
                <div class="flex items-center space-x-3 text-gray-400">
                    {move || {
                        if state_for_loading.loading.get() {
                            view! {
                                <span class="flex items-center space-x-2 text-primary-400">
                                    <span class="loading-spinner w-4 h-4" />
                                    <span>"Loading..."</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                    {move || {
                        state_for_update.last_update.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Updated {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not updated".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// Pause/resume and restart buttons for the poll loop
#[component]
fn PollControls() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_toggle = state.clone();
    let on_toggle = move |_| match state_for_toggle.run_state.get() {
        RunState::Running => state_for_toggle.run_state.set(RunState::Paused),
        RunState::Paused => state_for_toggle.run_state.set(RunState::Running),
        RunState::Exhausted => {}
    };

    let state_for_label = state.clone();
    let state_for_restart = state;
    let on_restart = move |_| {
        state_for_restart.restart();
        state_for_restart.show_success("Stream restarted from the first window");
    };

    view! {
        <button
            on:click=on_toggle
            class="px-2 py-1 rounded bg-gray-700 hover:bg-gray-600 text-xs"
        >
            {move || match state_for_label.run_state.get() {
                RunState::Running => "Pause",
                RunState::Paused => "Resume",
                RunState::Exhausted => "Ended",
            }}
        </button>
        <button
            on:click=on_restart
            class="px-2 py-1 rounded bg-gray-700 hover:bg-gray-600 text-xs"
        >
            "Restart"
        </button>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Monitoring"
            </A>
        </div>
    }
}
