//! D3-style axis rendering
//!
//! Draws a domain line with outer ticks plus one tick line and label per
//! tick, following the conventions of `d3.axisBottom`, `axisLeft` and
//! `axisTop`.

use crate::{
    chartkit::{format_year, LinearScale, PathBuilder, Scale, TimeScale},
    colors,
    orientation::{AxisOrient, AxisPlacement},
};
use gdp_core::{GroupedNumberFormatter, ValueFormatter};
use leptos::prelude::*;

/// Inner and outer tick length
pub const TICK_SIZE: f64 = 6.0;

/// Distance from tick line to label
pub const TICK_PADDING: f64 = 3.0;

/// Requested tick count, as D3's default
pub const TICK_COUNT: usize = 10;

/// A tick at `position` along the axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

impl AxisOrient {
    fn is_horizontal(&self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }

    /// Sign of the tick direction away from the domain line
    fn direction(&self) -> f64 {
        match self {
            Self::Bottom => 1.0,
            Self::Left | Self::Top => -1.0,
        }
    }

    /// SVG transform placing a tick group at `position`
    pub fn tick_transform(&self, position: f64) -> String {
        if self.is_horizontal() {
            format!("translate({}, 0)", position)
        } else {
            format!("translate(0, {})", position)
        }
    }

    /// End point of the tick line, starting at the group origin
    pub fn tick_line_end(&self) -> (f64, f64) {
        let k = self.direction() * TICK_SIZE;
        if self.is_horizontal() { (0.0, k) } else { (k, 0.0) }
    }

    /// Label position relative to the tick
    pub fn label_offset(&self) -> (f64, f64) {
        let k = self.direction() * (TICK_SIZE + TICK_PADDING);
        if self.is_horizontal() { (0.0, k) } else { (k, 0.0) }
    }

    pub fn label_dy(&self) -> &'static str {
        match self {
            Self::Bottom => "0.71em",
            Self::Left => "0.32em",
            Self::Top => "0em",
        }
    }

    pub fn text_anchor(&self) -> &'static str {
        match self {
            Self::Bottom | Self::Top => "middle",
            Self::Left => "end",
        }
    }

    /// Domain line spanning `range`, with outer ticks at both ends
    pub fn domain_path(&self, range: (f64, f64)) -> String {
        let k = self.direction() * TICK_SIZE;
        let (start, end) = range;

        if self.is_horizontal() {
            PathBuilder::new()
                .move_to(start, k)
                .vertical_to(0.0)
                .horizontal_to(end)
                .vertical_to(k)
                .build()
        } else {
            PathBuilder::new()
                .move_to(k, start)
                .horizontal_to(0.0)
                .vertical_to(end)
                .horizontal_to(k)
                .build()
        }
    }
}

/// Year ticks for the categorical axis
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<AxisTick> {
    scale
        .year_ticks(count)
        .into_iter()
        .map(|(ts, _)| AxisTick {
            position: scale.scale(ts),
            label: format_year(ts),
        })
        .collect()
}

/// Round-number ticks for the value axis
pub fn value_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let formatter = GroupedNumberFormatter::default();
    scale
        .ticks(count)
        .into_iter()
        .map(|tick| AxisTick {
            position: scale.scale(tick),
            label: formatter.format(tick),
        })
        .collect()
}

/// Axis group
#[component]
pub fn ChartAxis(
    #[prop(into)] id: String,
    placement: AxisPlacement,
    range: (f64, f64),
    ticks: Vec<AxisTick>,
) -> impl IntoView {
    let orient = placement.orient;
    let (line_x, line_y) = orient.tick_line_end();
    let (label_x, label_y) = orient.label_offset();

    view! {
        <g
            id=id
            class="axis"
            transform=placement.transform()
            fill="none"
            font-size="10"
            font-family="sans-serif"
            text-anchor=orient.text_anchor()
        >
            <path class="domain" stroke=colors::AXIS d=orient.domain_path(range) />
            {ticks.into_iter().map(|tick| {
                view! {
                    <g class="tick" transform=orient.tick_transform(tick.position)>
                        <line stroke=colors::AXIS x2=line_x y2=line_y />
                        <text
                            fill=colors::TEXT_MUTED
                            x=label_x
                            y=label_y
                            dy=orient.label_dy()
                        >
                            {tick.label}
                        </text>
                    </g>
                }
            }).collect_view()}
        </g>
    }
}
