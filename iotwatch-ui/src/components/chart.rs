//! Chart Components
//!
//! Per-channel time-series charts using HTML5 Canvas, arranged in the grid
//! the dashboard shows: CO, temperature, humidity, LPG, smoke, and a pie of
//! light on/off for the current window.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{on_off_counts, series, Channel, GlobalState};

/// Pie slice colors for on/off
const PIE_ON_COLOR: &str = "#FBC02D";
const PIE_OFF_COLOR: &str = "#455A64";

/// The chart grid the home page shows. Each chart redraws whenever the poll
/// loop replaces the window.
#[component]
pub fn ChartGrid() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <SensorChart title="time vs CO" channel=Channel::Co color="#FF9800" />
            <SensorChart title="time vs temperature" channel=Channel::Temp color="#F44336" />
            <SensorChart title="time vs humidity" channel=Channel::Humidity color="#2196F3" />
            <SensorChart title="time vs LPG" channel=Channel::Lpg color="#9C27B0" />
            <LightPie />
            <SensorChart title="time vs smoke" channel=Channel::Smoke color="#4CAF50" />
        </div>
    }
}

/// Line chart for one sensor channel
#[component]
pub fn SensorChart(
    /// Chart title, e.g. "time vs CO"
    title: &'static str,
    /// Which channel of the readings to plot
    channel: Channel,
    /// Trace color
    color: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the window changes
    create_effect(move |_| {
        let readings = state.readings.get();
        let points = series(&readings, channel);

        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, title, &points, color);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-2">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="220"
                class="w-full rounded"
            />
        </div>
    }
}

/// Pie chart of light on/off over the current window
#[component]
pub fn LightPie() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let readings = state.readings.get();
        let (on, off) = on_off_counts(&readings, |r| r.light);

        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, "light on/off", on, off);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-2">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="220"
                class="w-full rounded"
            />
        </div>
    }
}

/// Draw one channel's line+marker trace on a canvas
fn draw_series(canvas: &HtmlCanvasElement, title: &str, points: &[(i64, f64)], color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 48.0;
    let margin_right = 12.0;
    let margin_top = 26.0;
    let margin_bottom = 28.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(title, margin_left, 16.0);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Waiting for data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let (y_min, y_max) = padded_bounds(points.iter().map(|p| p.1));
    let t_min = points.first().map(|p| p.0).unwrap_or(0);
    let t_max = points.last().map(|p| p.0).unwrap_or(0);
    // A one-point window still needs a non-degenerate x axis
    let t_span = ((t_max - t_min) as f64).max(1.0);

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (4 lines)
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 4.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&axis_label(value, y_max - y_min), 4.0, y + 3.0);
        ctx.set_stroke_style(&"#374151".into());
    }

    // Line trace
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, (ts, value)) in points.iter().enumerate() {
        let x = margin_left + ((*ts - t_min) as f64 / t_span) * chart_width;
        let y = margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    // Markers
    ctx.set_fill_style(&color.into());
    for (ts, value) in points {
        let x = margin_left + ((*ts - t_min) as f64 / t_span) * chart_width;
        let y = margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

        ctx.begin_path();
        let _ = ctx.arc(x, y, 2.5, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis time labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("10px sans-serif");

    let num_labels: i64 = 3;
    for i in 0..=num_labels {
        let ts = t_min + i * (t_max - t_min) / num_labels;
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;

        let label = chrono::DateTime::from_timestamp_millis(ts)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default();

        let _ = ctx.fill_text(&label, x - 20.0, height - 8.0);
    }
}

/// Draw the light on/off pie for the current window
fn draw_pie(canvas: &HtmlCanvasElement, title: &str, on: usize, off: usize) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style(&"#d1d5db".into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(title, 48.0, 16.0);

    let total = on + off;
    if total == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Waiting for data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let cx = width / 2.0 - 30.0;
    let cy = height / 2.0 + 8.0;
    let radius = (height / 2.0) - 34.0;

    let tau = std::f64::consts::PI * 2.0;
    let start = -std::f64::consts::PI / 2.0;
    let on_angle = (on as f64 / total as f64) * tau;

    // On slice
    ctx.set_fill_style(&PIE_ON_COLOR.into());
    ctx.begin_path();
    ctx.move_to(cx, cy);
    let _ = ctx.arc(cx, cy, radius, start, start + on_angle);
    ctx.close_path();
    ctx.fill();

    // Off slice
    ctx.set_fill_style(&PIE_OFF_COLOR.into());
    ctx.begin_path();
    ctx.move_to(cx, cy);
    let _ = ctx.arc(cx, cy, radius, start + on_angle, start + tau);
    ctx.close_path();
    ctx.fill();

    // Legend
    ctx.set_font("11px sans-serif");
    let legend_x = width - 100.0;

    ctx.set_fill_style(&PIE_ON_COLOR.into());
    ctx.fill_rect(legend_x, 60.0, 10.0, 10.0);
    ctx.set_fill_style(&"#d1d5db".into());
    let _ = ctx.fill_text(&format!("On {}", on), legend_x + 16.0, 69.0);

    ctx.set_fill_style(&PIE_OFF_COLOR.into());
    ctx.fill_rect(legend_x, 80.0, 10.0, 10.0);
    ctx.set_fill_style(&"#d1d5db".into());
    let _ = ctx.fill_text(&format!("Off {}", off), legend_x + 16.0, 89.0);
}

/// Y-axis bounds with 10% headroom; flat series still get a visible band
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for v in values {
        min = min.min(v);
        max = max.max(v);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let pad = if range > 0.0 {
        range * 0.1
    } else if max.abs() > 0.0 {
        max.abs() * 0.1
    } else {
        1.0
    };

    (min - pad, max + pad)
}

/// Format an axis value with precision matched to the axis span: gas levels
/// sit near 0.005 while humidity sits near 50
fn axis_label(value: f64, span: f64) -> String {
    if span.abs() < 0.1 {
        format!("{:.4}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bounds_adds_headroom() {
        let (min, max) = padded_bounds([1.0, 2.0, 3.0].into_iter());
        assert!(min < 1.0 && min > 0.7);
        assert!(max > 3.0 && max < 3.3);
    }

    #[test]
    fn test_padded_bounds_flat_series() {
        let (min, max) = padded_bounds([5.0, 5.0].into_iter());
        assert!(min < 5.0);
        assert!(max > 5.0);
    }

    #[test]
    fn test_padded_bounds_empty() {
        let (min, max) = padded_bounds(std::iter::empty());
        assert_eq!((min, max), (0.0, 1.0));
    }

    #[test]
    fn test_axis_label_precision() {
        assert_eq!(axis_label(0.0051, 0.001), "0.0051");
        assert_eq!(axis_label(51.3, 10.0), "51.3");
    }
}
