//! Chart Components
//!
//! Category breakdown pie and monthly trend line, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api;
use crate::format::Currency;
use crate::state::global::{CategoryTotal, GlobalState, MonthlyPoint};

/// Slice colors for the category breakdown, cycled by position
pub const CHART_COLORS: [&str; 6] = [
    "#FF6384", // Pink
    "#36A2EB", // Blue
    "#FFCE56", // Yellow
    "#4BC0C0", // Teal
    "#9966FF", // Purple
    "#FF9F40", // Orange
];

/// Trend line color
const TREND_COLOR: &str = "#007bff";

/// Project categories into parallel label and value sequences, preserving
/// input order.
pub fn pie_series(categories: &[CategoryTotal]) -> (Vec<String>, Vec<f64>) {
    let labels = categories.iter().map(|c| c.name.clone()).collect();
    let values = categories.iter().map(|c| c.total).collect();
    (labels, values)
}

/// Color for the slice or legend entry at the given position.
pub fn slice_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Category breakdown pie chart with legend. An empty breakdown renders a
/// no-data notice instead; no canvas is created.
#[component]
pub fn CategoryChart(categories: Vec<CategoryTotal>) -> impl IntoView {
    if categories.is_empty() {
        return view! {
            <div class="text-center text-gray-400 py-12">
                "No expense data available. Add some expenses to see the breakdown."
            </div>
        }
        .into_view();
    }

    let (labels, values) = pie_series(&categories);
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &values);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full max-h-80 rounded-lg"
            />
            <PieLegend labels=labels />
        </div>
    }
    .into_view()
}

/// Legend mirroring slice order and colors
#[component]
fn PieLegend(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {labels
                .into_iter()
                .enumerate()
                .map(|(idx, label)| {
                    let color = slice_color(idx);
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Draw the pie chart on canvas
fn draw_pie(canvas: &HtmlCanvasElement, values: &[f64]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 10.0;

    // Slices start at twelve o'clock and sweep clockwise in input order
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, value) in values.iter().enumerate() {
        let end = start + value / total * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&slice_color(idx).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        start = end;
    }
}

/// Monthly trend line chart. Fetches the series on mount; a failed fetch
/// logs once and leaves the region untouched.
#[component]
pub fn TrendChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let currency = state.currency;
    let loading = state.loading;

    let points = create_rw_signal(None::<Vec<MonthlyPoint>>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        spawn_local(async move {
            loading.set(true);
            match api::fetch_monthly_trend().await {
                Ok(data) => {
                    points.set(Some(data));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch monthly trend: {}", e).into(),
                    );
                }
            }
            loading.set(false);
        });
    });

    // Redraw when the series arrives or the currency strategy changes
    create_effect(move |_| {
        let series = points.get();
        let active = currency.get();

        if let (Some(canvas), Some(series)) = (canvas_ref.get(), series) {
            draw_trend(&canvas, &series, active);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Draw the trend line chart on canvas
fn draw_trend(canvas: &HtmlCanvasElement, points: &[MonthlyPoint], currency: Currency) {
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
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(
            "No expense data for the last year",
            width / 2.0 - 100.0,
            height / 2.0,
        );
        return;
    }

    // Y range with padding
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.total);
        max = max.max(point.total);
    }

    let y_range = max - min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    min -= y_padding;
    max += y_padding;

    if min == max {
        min -= 1.0;
        max += 1.0;
    }

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&currency.format(value), 5.0, y + 4.0);
    }

    // Points are evenly spaced in response order
    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = move |i: usize| margin_left + i as f64 * step;
    let y_at = move |v: f64| margin_top + ((max - v) / (max - min)) * chart_height;

    // Line
    ctx.set_stroke_style(&TREND_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, point) in points.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(point.total);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&TREND_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            x_at(i),
            y_at(point.total),
            3.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // Month labels, thinned to stay readable
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let stride = (points.len() / 6).max(1);
    for (i, point) in points.iter().enumerate() {
        if i % stride != 0 && i != points.len() - 1 {
            continue;
        }
        let _ = ctx.fill_text(&point.month, x_at(i) - 20.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            name: name.to_string(),
            total,
        }
    }

    #[test]
    fn pie_series_preserves_order_and_length() {
        let categories = vec![
            category("Food", 120.0),
            category("Rent", 800.0),
            category("Travel", 40.5),
        ];

        let (labels, values) = pie_series(&categories);
        assert_eq!(labels, vec!["Food", "Rent", "Travel"]);
        assert_eq!(values, vec![120.0, 800.0, 40.5]);
        assert_eq!(labels.len(), values.len());
    }

    #[test]
    fn pie_series_empty_projects_empty() {
        let (labels, values) = pie_series(&[]);
        assert!(labels.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn palette_cycles_by_position() {
        assert_eq!(slice_color(0), CHART_COLORS[0]);
        assert_eq!(slice_color(5), CHART_COLORS[5]);
        assert_eq!(slice_color(6), CHART_COLORS[0]);
        assert_eq!(slice_color(13), CHART_COLORS[1]);
    }
}
