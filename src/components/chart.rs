//! Canvas Chart Adapter
//!
//! Draws a `ChartSpec` onto an HTML5 canvas. This is the single stateful
//! boundary of the chart pipeline: specs are pure data, the adapter owns
//! the pixels. Every draw clears the surface first, so re-rendering a spec
//! fully replaces the previous chart.

use leptos::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts::{slice_color, ChartKind, ChartSpec};

/// Errors acquiring the drawing surface
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The canvas exists but refused to hand out a 2D context
    #[error("drawing surface has no 2d context")]
    ContextUnavailable,
}

/// Chart component bound to one canvas surface
#[component]
pub fn CanvasChart(
    #[prop(into)] spec: Signal<Option<ChartSpec>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the spec changes
    create_effect(move |_| {
        let (Some(canvas), Some(spec)) = (canvas_ref.get(), spec.get()) else {
            return;
        };
        if let Err(e) = draw_chart(&canvas, &spec) {
            web_sys::console::error_1(&format!("Chart draw failed: {}", e).into());
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-80 rounded-lg"
            />

            {move || {
                spec.get()
                    .filter(|s| s.legend)
                    .map(|s| view! { <ChartLegend entries=s.legend_entries() /> })
            }}
        </div>
    }
}

/// Legend row of color swatches below the canvas
#[component]
fn ChartLegend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {entries
                .into_iter()
                .map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300 capitalize">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Draw the spec on the canvas
pub fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<(), SurfaceError> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(SurfaceError::ContextUnavailable)?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if spec.series.iter().all(|s| s.points.is_empty()) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No dreams logged yet", width / 2.0 - 80.0, height / 2.0);
        return Ok(());
    }

    match spec.kind {
        ChartKind::Doughnut => draw_doughnut(&ctx, spec, width, height),
        ChartKind::Line | ChartKind::Bar => draw_axes_chart(&ctx, spec, width, height),
    }

    Ok(())
}

fn draw_axes_chart(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Y range from the data, clamped by the axis options
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for series in &spec.series {
        for value in &series.points {
            y_min = y_min.min(*value);
            y_max = y_max.max(*value);
        }
    }

    if spec.y_axis.begin_at_zero {
        y_min = y_min.min(0.0);
    }
    match spec.y_axis.max {
        Some(max) => y_max = max,
        None => {
            let padding = if y_max > y_min { (y_max - y_min) * 0.1 } else { 1.0 };
            y_max += padding;
            if !spec.y_axis.begin_at_zero {
                y_min -= padding;
            }
        }
    }
    if let Some(step) = spec.y_axis.step {
        y_max = (y_max / step).ceil().max(1.0) * step;
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_max = y_min + 1.0;
    }

    let ticks = match spec.y_axis.step {
        Some(step) => (((y_max - y_min) / step).round() as usize).clamp(1, 10),
        None => 5,
    };

    // Grid lines and y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=ticks {
        let y = margin_top + (i as f64 / ticks as f64) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / ticks as f64) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let label = if spec.y_axis.step.is_some() {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        };
        let _ = ctx.fill_text(&label, 5.0, y + 4.0);
    }

    let n = spec.labels.len().max(1);
    let to_y = |value: f64| {
        margin_top + ((y_max - value) / (y_max - y_min)) * chart_height
    };

    match spec.kind {
        ChartKind::Line => {
            let to_x = |i: usize| {
                if n == 1 {
                    margin_left + chart_width / 2.0
                } else {
                    margin_left + (i as f64 / (n - 1) as f64) * chart_width
                }
            };

            for series in &spec.series {
                // Filled area under the line
                if let Some(fill) = series.fill {
                    ctx.begin_path();
                    for (i, value) in series.points.iter().enumerate() {
                        if i == 0 {
                            ctx.move_to(to_x(i), to_y(*value));
                        } else {
                            ctx.line_to(to_x(i), to_y(*value));
                        }
                    }
                    ctx.line_to(to_x(series.points.len().saturating_sub(1)), to_y(y_min));
                    ctx.line_to(to_x(0), to_y(y_min));
                    ctx.close_path();
                    ctx.set_fill_style(&fill.into());
                    ctx.fill();
                }

                ctx.set_stroke_style(&series.stroke.into());
                ctx.set_line_width(2.0);
                ctx.begin_path();
                for (i, value) in series.points.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(to_x(i), to_y(*value));
                    } else {
                        ctx.line_to(to_x(i), to_y(*value));
                    }
                }
                ctx.stroke();

                // Data points
                ctx.set_fill_style(&series.stroke.into());
                for (i, value) in series.points.iter().enumerate() {
                    ctx.begin_path();
                    let _ = ctx.arc(to_x(i), to_y(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
                    ctx.fill();
                }
            }
        }
        ChartKind::Bar => {
            let slot = chart_width / n as f64;
            let group_width = slot * 0.6;
            let bar_width = group_width / spec.series.len() as f64;
            let baseline = to_y(y_min.max(0.0));

            for (s_idx, series) in spec.series.iter().enumerate() {
                for (i, value) in series.points.iter().enumerate() {
                    let x = margin_left
                        + i as f64 * slot
                        + (slot - group_width) / 2.0
                        + s_idx as f64 * bar_width;
                    let top = to_y(*value);

                    if let Some(fill) = series.fill {
                        ctx.set_fill_style(&fill.into());
                        ctx.fill_rect(x, top, bar_width, baseline - top);
                    }
                    ctx.set_stroke_style(&series.stroke.into());
                    ctx.set_line_width(1.0);
                    ctx.stroke_rect(x, top, bar_width, baseline - top);
                }
            }
        }
        ChartKind::Doughnut => unreachable!("dispatched separately"),
    }

    // X-axis labels, thinned to at most six
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let stride = n.div_ceil(6).max(1);
    for (i, label) in spec.labels.iter().enumerate().step_by(stride) {
        let x = if matches!(spec.kind, ChartKind::Bar) {
            margin_left + (i as f64 + 0.5) * (chart_width / n as f64)
        } else if n == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (n - 1) as f64) * chart_width
        };
        let _ = ctx.fill_text(label, x - 25.0, height - 10.0);
    }
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let total: f64 = series.points.iter().sum();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) - 20.0;
    let inner = outer * 0.55;

    // Slices start at 12 o'clock and run clockwise
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (i, value) in series.points.iter().enumerate() {
        let sweep = (value / total) * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&slice_color(i).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, angle, angle + sweep);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, angle + sweep, angle, true);
        ctx.close_path();
        ctx.fill();

        angle += sweep;
    }
}
