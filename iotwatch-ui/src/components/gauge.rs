//! Gauge Components
//!
//! Radial gauges, a thermometer bar and LED indicators for the panel page.
//! Every widget is fed the latest reading of the current window.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Half-circle gauge for one numeric channel
#[component]
pub fn RadialGauge(
    /// Widget caption
    label: &'static str,
    /// Unit shown next to the caption
    unit: &'static str,
    /// Gauge floor
    min: f64,
    /// Gauge ceiling
    max: f64,
    /// Arc color
    color: &'static str,
    /// Current value; None renders an empty gauge
    #[prop(into)]
    value: Signal<Option<f64>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let v = value.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_gauge(&canvas, v, min, max, color);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex flex-col items-center">
            <canvas node_ref=canvas_ref width="180" height="110" />
            <div class="text-2xl font-bold mt-1">
                {move || {
                    value.get()
                        .map(format_gauge_value)
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>
            <div class="text-gray-400 text-sm">{label} " (" {unit} ")"</div>
        </div>
    }
}

/// Vertical thermometer bar for temperature
#[component]
pub fn Thermometer(
    /// Scale floor
    min: f64,
    /// Scale ceiling
    max: f64,
    /// Current temperature; None renders an empty tube
    #[prop(into)]
    value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex flex-col items-center">
            <div class="w-6 h-28 bg-gray-700 rounded-full overflow-hidden flex flex-col-reverse">
                <div
                    class="w-full bg-red-500"
                    style=move || {
                        let percent = value.get()
                            .map(|v| gauge_fraction(v, min, max) * 100.0)
                            .unwrap_or(0.0);
                        format!("height: {:.0}%", percent)
                    }
                />
            </div>
            <div class="text-2xl font-bold mt-2">
                {move || {
                    value.get()
                        .map(|v| format!("{:.1}", v))
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>
            <div class="text-gray-400 text-sm">"Temperature (°C)"</div>
        </div>
    }
}

/// LED indicator for a boolean channel
#[component]
pub fn Led(
    /// Widget caption
    label: &'static str,
    /// Lit state
    #[prop(into)]
    on: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex flex-col items-center justify-center">
            <div class=move || {
                if on.get() {
                    "w-10 h-10 rounded-full bg-green-400 pulse"
                } else {
                    "w-10 h-10 rounded-full bg-gray-600"
                }
            } />
            <div class="text-gray-400 text-sm mt-3">{label}</div>
            <div class="text-sm font-semibold">
                {move || if on.get() { "ON" } else { "OFF" }}
            </div>
        </div>
    }
}

/// Draw the half-circle gauge arc
fn draw_gauge(canvas: &HtmlCanvasElement, value: Option<f64>, min: f64, max: f64, color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height - 12.0;
    let radius = height - 32.0;
    let pi = std::f64::consts::PI;

    // Track
    ctx.set_line_width(12.0);
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, pi, pi * 2.0);
    ctx.stroke();

    // Value arc
    if let Some(v) = value {
        let fraction = gauge_fraction(v, min, max);
        if fraction > 0.0 {
            ctx.set_stroke_style(&color.into());
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, radius, pi, pi + fraction * pi);
            ctx.stroke();
        }
    }
}

/// Where a value sits on the gauge scale, clamped to [0, 1]
fn gauge_fraction(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Gas channels sit near 0.005, humidity near 50; match precision to scale
fn format_gauge_value(value: f64) -> String {
    if value.abs() < 1.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_fraction_in_range() {
        assert_eq!(gauge_fraction(5.0, 0.0, 10.0), 0.5);
        assert_eq!(gauge_fraction(0.0, 0.0, 10.0), 0.0);
        assert_eq!(gauge_fraction(10.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_gauge_fraction_clamps() {
        assert_eq!(gauge_fraction(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(gauge_fraction(42.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_gauge_fraction_degenerate_scale() {
        assert_eq!(gauge_fraction(1.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_format_gauge_value() {
        assert_eq!(format_gauge_value(0.0076), "0.0076");
        assert_eq!(format_gauge_value(51.34), "51.3");
    }
}
