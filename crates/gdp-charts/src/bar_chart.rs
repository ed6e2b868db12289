//! Quarterly GDP bar chart
//!
//! Builds the three scales from the layout and dataset, computes bar
//! geometry, and renders axes, bars, static labels and the hover tooltip.

use crate::{
    axis::{time_ticks, value_ticks, ChartAxis, TICK_COUNT},
    chartkit::{LinearScale, Scale, TimeScale},
    colors,
    layout::Layout,
    orientation::{self, BarGeometry, Orientation},
    tooltip::{ChartTooltip, TooltipController},
};
use gdp_core::{QuarterlyPoint, ValidDataset};
use leptos::prelude::*;
use web_sys::MouseEvent;

/// Text of the value-axis label
pub const VALUE_AXIS_LABEL: &str = "GDP (in $ Billion)";

/// Per-bar entrance delay step, in milliseconds
pub const ENTER_DELAY_STEP_MS: u64 = 10;

// ============================================================================
// SCALES
// ============================================================================

/// Coordinate mappings shared by axes and bars
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    /// Date → position along the categorical axis
    pub position: TimeScale,
    /// GDP → value-axis tick coordinate
    pub axis_value: LinearScale,
    /// GDP → bar length, always starting at zero
    pub bar_value: LinearScale,
}

impl Scales {
    pub fn build(orientation: &dyn Orientation, dataset: &ValidDataset) -> Self {
        let (from, to) = dataset.time_range();
        // an all-zero dataset still needs a non-degenerate value domain
        let max = match dataset.max_gdp() {
            m if m > 0.0 => m,
            _ => 1.0,
        };

        Self {
            position: TimeScale::new()
                .domain(from, to)
                .range_tuple(orientation.position_range()),
            axis_value: LinearScale::new()
                .domain(0.0, max)
                .range_tuple(orientation.axis_value_range()),
            bar_value: LinearScale::new()
                .domain(0.0, max)
                .range_tuple(orientation.bar_value_range()),
        }
    }
}

/// Build scales for `layout` with its orientation strategy
pub fn build_scales(layout: Layout, dataset: &ValidDataset) -> Scales {
    Scales::build(orientation::select(layout).as_ref(), dataset)
}

// ============================================================================
// BARS
// ============================================================================

/// One rendered bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub point: QuarterlyPoint,
    pub geometry: BarGeometry,
}

impl Bar {
    pub fn index(&self) -> usize {
        self.point.index
    }

    /// Entrance animation start delay
    pub fn enter_delay_ms(&self) -> u64 {
        self.point.index as u64 * ENTER_DELAY_STEP_MS
    }

    /// Entrance animation duration
    pub fn enter_duration_ms(&self) -> u64 {
        self.point.index as u64
    }
}

/// Compute geometry for every point. Bars share one band width along the
/// categorical axis; `ValidDataset` is never empty.
pub fn layout_bars(orientation: &dyn Orientation, scales: &Scales, dataset: &ValidDataset) -> Vec<Bar> {
    let band = orientation.layout().categorical_length() / dataset.len() as f64;

    dataset
        .points
        .iter()
        .map(|point| {
            let position = scales.position.scale(point.timestamp());
            let length = scales.bar_value.scale(point.gdp);
            Bar {
                point: point.clone(),
                geometry: orientation.bar_geometry(position, length, band),
            }
        })
        .collect()
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Bar chart of quarterly GDP
#[component]
pub fn GdpBarChart(layout: Layout, dataset: ValidDataset) -> impl IntoView {
    let orientation = orientation::select(layout);
    let scales = Scales::build(orientation.as_ref(), &dataset);
    let bars = layout_bars(orientation.as_ref(), &scales, &dataset);
    let tooltip = TooltipController::new(orientation.clone());

    tracing::info!("Rendering {} bars (rotate {})", bars.len(), layout.rotate);

    // flip after the first paint so the CSS transition runs
    let grown = RwSignal::new(false);
    Effect::new(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || grown.set(true));
        });
    });

    let source = orientation.source_label();
    let value_label = orientation.value_label();
    let category_axis = orientation.category_axis();
    let value_axis = orientation.value_axis();
    let category_ticks = time_ticks(&scales.position, TICK_COUNT);
    let value_axis_ticks = value_ticks(&scales.axis_value, TICK_COUNT);

    view! {
        <svg
            id="chart"
            class="gdp-chart"
            width=layout.width
            height=layout.height
            viewBox=layout.viewbox()
        >
            <text
                id="source"
                x=source.x
                y=source.y
                class=if source.vertical { "vertical-text" } else { "" }
                fill=colors::TEXT_MUTED
            >
                {dataset.source_label()}
            </text>

            <text
                id="value-label"
                x=value_label.x
                y=value_label.y
                style=value_label
                    .transform
                    .map(|t| format!("transform: {}", t))
                    .unwrap_or_default()
                fill=colors::TEXT_MUTED
            >
                {VALUE_AXIS_LABEL}
            </text>

            <ChartAxis
                id="x-axis"
                placement=category_axis
                range=scales.position.range_bounds()
                ticks=category_ticks
            />
            <ChartAxis
                id="y-axis"
                placement=value_axis
                range=scales.axis_value.range_bounds()
                ticks=value_axis_ticks
            />

            {bars.into_iter().map(|bar| {
                let grow = orientation.clone();
                let delay = bar.enter_delay_ms();
                let duration = bar.enter_duration_ms();
                let style = move || format!(
                    "transform: {}; transform-origin: {}; transform-box: fill-box; transition: transform {}ms linear {}ms",
                    grow.grow_transform(if grown.get() { 1.0 } else { 0.0 }),
                    grow.grow_origin(),
                    duration,
                    delay,
                );

                let Bar { point, geometry } = bar;
                let hover = tooltip.clone();
                let unhover = tooltip.clone();
                let hovered = point.clone();

                view! {
                    <rect
                        class="bar"
                        index=point.index
                        data-date=point.date.clone()
                        data-gdp=point.gdp
                        x=geometry.x
                        y=geometry.y
                        width=geometry.width
                        height=geometry.height
                        fill=colors::BAR
                        style=style
                        on:mouseover=move |ev: MouseEvent| {
                            tracing::trace!("mouseover at ({}, {})", ev.client_x(), ev.client_y());
                            hover.on_hover(&geometry, &hovered);
                        }
                        on:mouseout=move |_: MouseEvent| unhover.on_unhover()
                    />
                }
            }).collect_view()}

            <ChartTooltip state=tooltip.state() />
        </svg>
    }
}
