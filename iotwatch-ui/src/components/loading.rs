//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for the chart grid
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-4 animate-pulse">
            {(0..6).map(|_| view! {
                <div class="bg-gray-800 rounded-lg p-2">
                    <div class="h-52 bg-gray-700 rounded" />
                </div>
            }).collect_view()}
        </div>
    }
}
