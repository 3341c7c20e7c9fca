//! Chart Components
//!
//! Dashboard charts drawn on HTML5 Canvas: the monthly sales line and the
//! top-products doughnut. Each chart slot holds at most one dataset;
//! rendering replaces the slot's dataset and redraws its anchor from
//! scratch.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api;
use crate::state::global::{AppState, ChartData, ChartSlot, ProductsSeries, SalesSeries};
use crate::util::format_currency;

const SALES_LINE_COLOR: &str = "#2563eb";
const SALES_FILL_COLOR: &str = "rgba(37, 99, 235, 0.1)";

/// Fixed palette for the products doughnut, assigned by category index.
/// Categories beyond the palette wrap around.
const PRODUCT_PALETTE: [&str; 5] = ["#2563eb", "#22c55e", "#eab308", "#ef4444", "#0ea5e9"];

const CANVAS_BG: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400

const DOUGHNUT_MARGIN: f64 = 10.0;
const DOUGHNUT_HOLE_RATIO: f64 = 0.55;

/// Palette color for a category index.
pub fn palette_color(index: usize) -> &'static str {
    PRODUCT_PALETTE[index % PRODUCT_PALETTE.len()]
}

/// Fetch both dashboard datasets and hand them to their chart slots. A
/// failure is logged and toasted; previously rendered charts stay as they
/// are.
pub async fn load_dashboard_charts(state: AppState) {
    match api::fetch_dashboard_charts().await {
        Ok(charts) => {
            state.render_chart(ChartSlot::Sales, ChartData::Sales(charts.sales));
            state.render_chart(ChartSlot::Products, ChartData::Products(charts.products));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading dashboard charts: {}", e).into());
            state.show_error("Erro ao carregar gráficos");
        }
    }
}

/// Monthly sales line chart
#[component]
pub fn SalesChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the slot's dataset changes; a missing anchor is a no-op
    create_effect(move |_| {
        let charts = state.charts.get();
        let Some(ChartData::Sales(series)) = charts.get(&ChartSlot::Sales) else {
            return;
        };
        if let Some(canvas) = canvas_ref.get() {
            draw_sales_chart(&canvas, series);
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

/// Top-products doughnut chart with bottom legend and hover tooltip
#[component]
pub fn ProductsChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (tooltip, set_tooltip) = create_signal(None::<(i32, i32, String)>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let charts = state_for_effect.charts.get();
        let Some(ChartData::Products(series)) = charts.get(&ChartSlot::Products) else {
            return;
        };
        if let Some(canvas) = canvas_ref.get() {
            draw_products_chart(&canvas, series);
        }
    });

    let state_for_hover = state;
    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let charts = state_for_hover.charts.get_untracked();
        let Some(ChartData::Products(series)) = charts.get(&ChartSlot::Products) else {
            set_tooltip.set(None);
            return;
        };

        // Map CSS pixel offsets onto canvas coordinates
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = ev.offset_x() as f64 * canvas.width() as f64 / rect.width();
        let y = ev.offset_y() as f64 * canvas.height() as f64 / rect.height();

        let segment = doughnut_segment_at(
            x,
            y,
            canvas.width() as f64,
            canvas.height() as f64,
            &series.revenues,
        );
        match segment {
            Some(idx) => {
                let label = series.labels.get(idx).map(String::as_str).unwrap_or("");
                let text = format!("{}: {}", label, format_currency(series.revenues[idx]));
                set_tooltip.set(Some((ev.offset_x(), ev.offset_y(), text)));
            }
            None => set_tooltip.set(None),
        }
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full h-64 rounded-lg"
                on:mousemove=on_mousemove
                on:mouseleave=move |_| set_tooltip.set(None)
            />

            {move || {
                tooltip.get().map(|(x, y, text)| view! {
                    <div
                        class="absolute bg-gray-900 text-white text-xs rounded px-2 py-1 \
                               pointer-events-none shadow-lg"
                        style=format!("left: {}px; top: {}px", x + 12, y - 8)
                    >
                        {text}
                    </div>
                })
            }}

            <ProductsLegend />
        </div>
    }
}

/// Bottom legend for the doughnut, one entry per category
#[component]
fn ProductsLegend() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                let charts = state.charts.get();
                match charts.get(&ChartSlot::Products) {
                    Some(ChartData::Products(series)) => series
                        .labels
                        .iter()
                        .enumerate()
                        .map(|(idx, label)| {
                            let amount = series.revenues.get(idx).copied().unwrap_or(0.0);
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", palette_color(idx))
                                    />
                                    <span class="text-sm text-gray-300">
                                        {format!("{}: {}", label, format_currency(amount))}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view(),
                    _ => view! {}.into_view(),
                }
            }}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Y-axis ceiling for a sales series: zero-based with 10% headroom.
fn y_axis_max(data: &[f64]) -> f64 {
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Draw the monthly sales line on its canvas
fn draw_sales_chart(canvas: &HtmlCanvasElement, series: &SalesSeries) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins; the left one fits currency tick labels
    let margin_left = 85.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&CANVAS_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.data.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Sem dados para apresentar", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let y_max = y_axis_max(&series.data);

    // Horizontal grid lines with currency tick labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;

        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_currency(value), 5.0, y + 4.0);
    }

    // Scale data into canvas points
    let count = series.data.len();
    let points: Vec<(f64, f64)> = series
        .data
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if count == 1 {
                margin_left + chart_width / 2.0
            } else {
                margin_left + (i as f64 / (count - 1) as f64) * chart_width
            };
            let y = margin_top + (1.0 - value / y_max) * chart_height;
            (x, y)
        })
        .collect();

    // Filled area under the smoothed line
    let baseline = margin_top + chart_height;
    ctx.set_fill_style(&SALES_FILL_COLOR.into());
    trace_smooth_path(&ctx, &points);
    if let Some(&(last_x, _)) = points.last() {
        ctx.line_to(last_x, baseline);
        ctx.line_to(points[0].0, baseline);
    }
    ctx.close_path();
    ctx.fill();

    // Smoothed line
    ctx.set_stroke_style(&SALES_LINE_COLOR.into());
    ctx.set_line_width(2.0);
    trace_smooth_path(&ctx, &points);
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&SALES_LINE_COLOR.into());
    for &(x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // X-axis labels, thinned so they never overlap
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");
    let step = (series.labels.len() / 6).max(1);
    for (i, label) in series.labels.iter().enumerate().step_by(step) {
        if let Some(&(x, _)) = points.get(i) {
            let _ = ctx.fill_text(label, x - 20.0, height - 10.0);
        }
    }
}

/// Trace a smoothed path through the points using quadratic curves toward
/// segment midpoints.
fn trace_smooth_path(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    ctx.begin_path();
    let Some(&(first_x, first_y)) = points.first() else {
        return;
    };
    ctx.move_to(first_x, first_y);

    for window in points.windows(2) {
        let (px, py) = window[0];
        let (cx, cy) = window[1];
        ctx.quadratic_curve_to(px, py, (px + cx) / 2.0, (py + cy) / 2.0);
    }
    if let Some(&(last_x, last_y)) = points.last() {
        ctx.line_to(last_x, last_y);
    }
}

/// Draw the top-products doughnut on its canvas
fn draw_products_chart(canvas: &HtmlCanvasElement, series: &ProductsSeries) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&CANVAS_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let fractions = segment_fractions(&series.revenues);
    if fractions.iter().all(|fraction| *fraction <= 0.0) {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Sem dados para apresentar", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let (outer, inner) = doughnut_radii(width, height);
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    // Segments start at the top and run clockwise
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, fraction) in fractions.iter().enumerate() {
        if *fraction <= 0.0 {
            continue;
        }
        let end = start + fraction * std::f64::consts::TAU;

        ctx.set_fill_style(&palette_color(idx).into());
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, outer, start, end);
        ctx.close_path();
        ctx.fill();

        start = end;
    }

    // Cut the hole
    ctx.set_fill_style(&CANVAS_BG.into());
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, inner, 0.0, std::f64::consts::TAU);
    ctx.fill();
}

/// Outer and inner radius of the doughnut for a canvas size.
fn doughnut_radii(width: f64, height: f64) -> (f64, f64) {
    let outer = width.min(height) / 2.0 - DOUGHNUT_MARGIN;
    (outer, outer * DOUGHNUT_HOLE_RATIO)
}

/// Fraction of the whole taken by each value. Non-positive values chart
/// as zero-width segments; an all-zero series yields all-zero fractions.
fn segment_fractions(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|value| **value > 0.0).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| if *value > 0.0 { value / total } else { 0.0 })
        .collect()
}

/// Which doughnut segment, if any, the canvas point (x, y) falls in.
fn doughnut_segment_at(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    values: &[f64],
) -> Option<usize> {
    let (outer, inner) = doughnut_radii(width, height);
    let dx = x - width / 2.0;
    let dy = y - height / 2.0;
    let radius = (dx * dx + dy * dy).sqrt();
    if radius < inner || radius > outer {
        return None;
    }

    // Angle measured from the top, clockwise, as the segments are drawn
    let mut angle = dy.atan2(dx) + std::f64::consts::FRAC_PI_2;
    if angle < 0.0 {
        angle += std::f64::consts::TAU;
    }
    let position = angle / std::f64::consts::TAU;

    let mut cumulative = 0.0;
    for (idx, fraction) in segment_fractions(values).iter().enumerate() {
        cumulative += fraction;
        if *fraction > 0.0 && position < cumulative {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_past_five_categories() {
        assert_eq!(palette_color(0), PRODUCT_PALETTE[0]);
        assert_eq!(palette_color(4), PRODUCT_PALETTE[4]);
        assert_eq!(palette_color(5), PRODUCT_PALETTE[0]);
        assert_eq!(palette_color(7), PRODUCT_PALETTE[2]);
    }

    #[test]
    fn fractions_sum_to_one_for_positive_values() {
        let fractions = segment_fractions(&[2.0, 1.0, 1.0]);
        assert_eq!(fractions, vec![0.5, 0.25, 0.25]);
        assert!((fractions.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_values_take_no_width() {
        assert_eq!(segment_fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(segment_fractions(&[-5.0, 10.0]), vec![0.0, 1.0]);
        assert!(segment_fractions(&[]).is_empty());
    }

    #[test]
    fn y_axis_starts_at_zero_with_headroom() {
        assert!((y_axis_max(&[100.0, 500.0]) - 550.0).abs() < 1e-9);
        assert_eq!(y_axis_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn hit_test_resolves_quadrants() {
        // 400x300 canvas: center (200, 150), outer radius 140
        let values = [1.0, 1.0, 1.0, 1.0];

        // Straight up from center: first segment (segments start at the top)
        assert_eq!(doughnut_segment_at(200.0, 50.0, 400.0, 300.0, &values), Some(0));
        // Straight right: second segment
        assert_eq!(doughnut_segment_at(300.0, 150.0, 400.0, 300.0, &values), Some(1));
        // Straight down: third segment
        assert_eq!(doughnut_segment_at(200.0, 250.0, 400.0, 300.0, &values), Some(2));
        // Straight left: fourth segment
        assert_eq!(doughnut_segment_at(100.0, 150.0, 400.0, 300.0, &values), Some(3));
    }

    #[test]
    fn hit_test_misses_hole_and_outside() {
        let values = [1.0, 1.0];
        // Inside the hole
        assert_eq!(doughnut_segment_at(200.0, 150.0, 400.0, 300.0, &values), None);
        // Beyond the outer radius
        assert_eq!(doughnut_segment_at(395.0, 150.0, 400.0, 300.0, &values), None);
    }

    #[test]
    fn hit_test_skips_zero_width_segments() {
        // Second value is zero; the ring is entirely the first segment
        let values = [1.0, 0.0];
        assert_eq!(doughnut_segment_at(300.0, 150.0, 400.0, 300.0, &values), Some(0));
        assert_eq!(doughnut_segment_at(100.0, 150.0, 400.0, 300.0, &values), Some(0));
    }
}
