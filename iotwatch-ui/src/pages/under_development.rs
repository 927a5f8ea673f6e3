//! Under Development Page
//!
//! Placeholder for routes that exist in the navigation but are not built.

use leptos::*;

/// Placeholder page component
#[component]
pub fn UnderDevelopment(
    /// Page heading
    title: &'static str,
    /// What will live here eventually
    note: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
            <div class="text-5xl mb-4">"🚧"</div>
            <h1 class="text-3xl font-bold mb-2">{title}</h1>
            <p class="text-red-400">{note}</p>
        </div>
    }
}
