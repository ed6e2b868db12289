//! Hover tooltip for bars
//!
//! A single tooltip/background pair is shared by every bar. Each hover fully
//! overwrites its position and content; unhover only hides it.

use crate::{colors, orientation::{BarGeometry, Orientation}};
use gdp_core::QuarterlyPoint;
use leptos::prelude::*;
use std::sync::Arc;

/// Inner margin between tooltip text and its background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipMargin {
    pub x: f64,
    pub y: f64,
}

/// Tooltip background dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

pub const TOOLTIP_MARGIN: TooltipMargin = TooltipMargin { x: 10.0, y: 22.0 };

pub const TOOLTIP_BG: TooltipSize = TooltipSize {
    width: 2.0 * TOOLTIP_MARGIN.x + 108.0,
    height: 2.0 * TOOLTIP_MARGIN.y + 15.0,
};

/// Space between a bar and its tooltip
pub const TOOLTIP_GAP: f64 = 20.0;

/// Extra shift applied when the tooltip flips to the bar's other side
pub const TOOLTIP_FLIP_NUDGE: f64 = 4.0;

/// Baseline offset of the value line below the quarter line
pub const TOOLTIP_LINE_OFFSET: f64 = 25.0;

/// Positions of the tooltip parts, in SVG coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Quarter line
    pub text: (f64, f64),
    /// Value line
    pub detail: (f64, f64),
    /// Background top-left corner
    pub background: (f64, f64),
}

// ============================================================================
// TOOLTIP STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub placement: TooltipPlacement,
    pub title: String,
    pub detail: String,
    /// Date of the hovered bar, exposed as `data-date`
    pub date: Option<String>,
    pub visible: bool,
}

impl TooltipState {
    pub fn hidden(orientation: &dyn Orientation) -> Self {
        Self {
            placement: orientation.tooltip_anchor(),
            title: String::new(),
            detail: String::new(),
            date: None,
            visible: false,
        }
    }

    pub fn hover(&mut self, orientation: &dyn Orientation, bar: &BarGeometry, point: &QuarterlyPoint) {
        self.placement = orientation.place_tooltip(bar);
        self.title = point.quarter_label();
        self.detail = point.value_label();
        self.date = Some(point.date.clone());
        self.visible = true;
    }

    pub fn unhover(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Hover/unhover handlers writing into the shared tooltip signal
#[derive(Clone)]
pub struct TooltipController {
    orientation: Arc<dyn Orientation>,
    state: RwSignal<TooltipState>,
}

impl TooltipController {
    pub fn new(orientation: Arc<dyn Orientation>) -> Self {
        let state = RwSignal::new(TooltipState::hidden(orientation.as_ref()));
        Self { orientation, state }
    }

    pub fn on_hover(&self, bar: &BarGeometry, point: &QuarterlyPoint) {
        tracing::debug!("Tooltip for {} ({})", point.date, point.gdp);
        let orientation = self.orientation.clone();
        self.state
            .update(|s| s.hover(orientation.as_ref(), bar, point));
    }

    pub fn on_unhover(&self) {
        self.state.update(TooltipState::unhover);
    }

    pub fn state(&self) -> Signal<TooltipState> {
        self.state.into()
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Tooltip text and its background rectangle
#[component]
pub fn ChartTooltip(#[prop(into)] state: Signal<TooltipState>) -> impl IntoView {
    let opacity = move || format!("opacity: {}", state.with(|s| s.opacity()));

    view! {
        <rect
            id="tooltip-bg"
            x=move || state.with(|s| s.placement.background.0)
            y=move || state.with(|s| s.placement.background.1)
            width=TOOLTIP_BG.width
            height=TOOLTIP_BG.height
            rx="4"
            fill=colors::TOOLTIP_BG
            pointer-events="none"
            style=opacity
        />
        <text
            id="tooltip"
            x=move || state.with(|s| s.placement.text.0)
            y=move || state.with(|s| s.placement.text.1)
            data-date=move || state.with(|s| s.date.clone().unwrap_or_default())
            font-size="1.25em"
            fill=colors::TOOLTIP_TEXT
            pointer-events="none"
            style=opacity
        >
            {move || state.with(|s| s.title.clone())}
            <tspan
                x=move || state.with(|s| s.placement.detail.0)
                y=move || state.with(|s| s.placement.detail.1)
            >
                {move || state.with(|s| s.detail.clone())}
            </tspan>
        </text>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::Layout,
        orientation::{NormalLayout, RotatedLayout},
    };
    use chrono::NaiveDate;

    fn point(date: &str, gdp: f64) -> QuarterlyPoint {
        QuarterlyPoint {
            index: 0,
            date: date.to_string(),
            parsed: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            gdp,
        }
    }

    fn bar_at(x: f64, y: f64) -> BarGeometry {
        BarGeometry { x, y, width: 3.0, height: 100.0 }
    }

    #[test]
    fn test_background_size() {
        assert_eq!(TOOLTIP_BG.width, 128.0);
        assert_eq!(TOOLTIP_BG.height, 59.0);
    }

    #[test]
    fn test_normal_places_right_of_bar() {
        let o = NormalLayout::new(Layout::default());
        let p = o.place_tooltip(&bar_at(100.7, 200.0));

        assert_eq!(p.text, (120.0, 375.0));
        assert_eq!(p.detail, (120.0, 400.0));
        assert_eq!(p.background, (110.0, 353.0));
    }

    #[test]
    fn test_normal_flips_near_right_edge() {
        let o = NormalLayout::new(Layout::default());
        let p = o.place_tooltip(&bar_at(950.0, 200.0));

        // proposed 970 would overflow; flip to the left of the bar
        let proposed = 950.0 + TOOLTIP_GAP;
        assert_eq!(p.text.0, proposed - TOOLTIP_GAP - TOOLTIP_BG.width - TOOLTIP_FLIP_NUDGE);
        assert_eq!(p.text.0, 818.0);
        assert_eq!(p.background.0, 808.0);
    }

    #[test]
    fn test_normal_flip_boundary() {
        let o = NormalLayout::new(Layout::default());
        // 851 + 20 = 871 < 872 stays right
        assert_eq!(o.place_tooltip(&bar_at(851.0, 0.0)).text.0, 871.0);
        // 852 + 20 = 872 flips
        assert_eq!(o.place_tooltip(&bar_at(852.0, 0.0)).text.0, 720.0);
    }

    #[test]
    fn test_rotated_places_above_bar() {
        let o = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        let p = o.place_tooltip(&bar_at(45.0, 500.0));

        assert_eq!(p.text, (200.0, 441.0));
        assert_eq!(p.detail, (200.0, 466.0));
        assert_eq!(p.background, (190.0, 419.0));
    }

    #[test]
    fn test_rotated_flips_near_top() {
        let o = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        let p = o.place_tooltip(&bar_at(45.0, 100.0));

        // 100 - 59 = 41, 41 - 22 <= 45 so it drops below the bar
        assert_eq!(p.text.1, 41.0 + 59.0 + 22.0 + 20.0);
    }

    #[test]
    fn test_hover_and_unhover() {
        let o = NormalLayout::new(Layout::default());
        let mut state = TooltipState::hidden(&o);
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.placement.text, (0.0, 375.0));

        state.hover(&o, &bar_at(100.0, 0.0), &point("2015-04-01", 17998.3));
        assert_eq!(state.opacity(), 1.0);
        assert_eq!(state.title, "2015 Q2");
        assert_eq!(state.detail, "$17998.3 B");
        assert_eq!(state.date.as_deref(), Some("2015-04-01"));

        let placed = state.placement;
        state.unhover();
        assert_eq!(state.opacity(), 0.0);
        assert_eq!(state.placement, placed);
    }

    #[test]
    fn test_last_hover_wins() {
        let o = NormalLayout::new(Layout::default());
        let mut state = TooltipState::hidden(&o);

        state.hover(&o, &bar_at(100.0, 0.0), &point("2015-01-01", 1.0));
        state.hover(&o, &bar_at(300.0, 0.0), &point("2015-10-01", 2.0));

        assert_eq!(state.title, "2015 Q4");
        assert_eq!(state.placement.text.0, 320.0);
    }
}
