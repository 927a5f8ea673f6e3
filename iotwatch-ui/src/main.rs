//! IoTWatch Dashboard
//!
//! Real-time IoT monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live line charts for every sensor channel
//! - Gauge/LED panel fed by the latest reading
//! - Fixed-cadence polling that walks the dataset window by window
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It polls the IoTWatch API on an interval timer; the timer is
//! the tick counter that selects which window of readings is on screen.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
