//! Orientation strategies
//!
//! Every coordinate decision that differs between the normal (vertical bars)
//! and rotated (horizontal bars) chart lives behind the [`Orientation`] trait.
//! The strategy is picked once from [`Layout::rotate`].

use crate::{
    layout::Layout,
    tooltip::{TooltipPlacement, TOOLTIP_BG, TOOLTIP_GAP, TOOLTIP_FLIP_NUDGE, TOOLTIP_LINE_OFFSET, TOOLTIP_MARGIN},
};
use std::sync::Arc;

/// Rendered rectangle of a single bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Side of the scale the tick labels sit on (D3 `axisBottom` etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
    Top,
}

/// Where an axis group is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    pub orient: AxisOrient,
    pub offset: (f64, f64),
}

impl AxisPlacement {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.offset.0, self.offset.1)
    }
}

/// Position of a static text label inside the SVG
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    /// Extra CSS transform applied to the label
    pub transform: Option<&'static str>,
    /// Label is written top-to-bottom
    pub vertical: bool,
}

/// Coordinate-mapping strategy for one chart orientation
pub trait Orientation: Send + Sync {
    fn layout(&self) -> Layout;

    /// Output range of the date → position scale
    fn position_range(&self) -> (f64, f64);

    /// Output range of the value scale used for axis ticks
    fn axis_value_range(&self) -> (f64, f64);

    /// Output range of the value scale used for bar magnitudes
    fn bar_value_range(&self) -> (f64, f64) {
        (0.0, self.layout().value_length())
    }

    /// Bar rectangle from its categorical position, value length and band
    fn bar_geometry(&self, position: f64, length: f64, band: f64) -> BarGeometry;

    fn category_axis(&self) -> AxisPlacement;

    fn value_axis(&self) -> AxisPlacement;

    fn source_label(&self) -> LabelPlacement;

    fn value_label(&self) -> LabelPlacement;

    /// Tooltip position before any hover
    fn tooltip_anchor(&self) -> TooltipPlacement;

    /// Tooltip position next to `bar`, flipped away from the chart edge
    fn place_tooltip(&self, bar: &BarGeometry) -> TooltipPlacement;

    /// CSS transform for the entrance animation at `progress` (0 to 1)
    fn grow_transform(&self, progress: f64) -> String;

    /// CSS transform-origin: the bar's baseline
    fn grow_origin(&self) -> &'static str;
}

// ============================================================================
// NORMAL LAYOUT
// ============================================================================

/// Categorical axis horizontal, bars grow upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalLayout {
    layout: Layout,
}

impl NormalLayout {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    fn tooltip_y(&self) -> f64 {
        self.layout.height * 3.0 / 4.0
    }
}

impl Orientation for NormalLayout {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn position_range(&self) -> (f64, f64) {
        let Layout { width, padding, .. } = self.layout;
        (padding, width - padding)
    }

    fn axis_value_range(&self) -> (f64, f64) {
        let Layout { height, padding, .. } = self.layout;
        (height - padding, 0.0)
    }

    fn bar_geometry(&self, position: f64, length: f64, band: f64) -> BarGeometry {
        let Layout { height, padding, .. } = self.layout;
        BarGeometry {
            x: position,
            y: height - padding - length,
            width: band,
            height: length,
        }
    }

    fn category_axis(&self) -> AxisPlacement {
        AxisPlacement {
            orient: AxisOrient::Bottom,
            offset: (0.0, self.layout.height - self.layout.padding),
        }
    }

    fn value_axis(&self) -> AxisPlacement {
        AxisPlacement {
            orient: AxisOrient::Left,
            offset: (self.layout.padding, 0.0),
        }
    }

    fn source_label(&self) -> LabelPlacement {
        LabelPlacement {
            x: self.layout.padding,
            y: self.layout.height - 5.0,
            transform: None,
            vertical: false,
        }
    }

    fn value_label(&self) -> LabelPlacement {
        LabelPlacement {
            x: self.layout.padding + 20.0,
            y: self.layout.padding,
            transform: Some("translate(20px, 215px) rotate(-90deg)"),
            vertical: false,
        }
    }

    fn tooltip_anchor(&self) -> TooltipPlacement {
        let y = self.tooltip_y();
        TooltipPlacement {
            text: (0.0, y),
            detail: (0.0, y + TOOLTIP_LINE_OFFSET),
            background: (0.0, y - TOOLTIP_MARGIN.y),
        }
    }

    fn place_tooltip(&self, bar: &BarGeometry) -> TooltipPlacement {
        let y = self.tooltip_y();
        let mut x = bar.x.trunc() + TOOLTIP_GAP;
        if x >= self.layout.width - TOOLTIP_BG.width {
            x = x - TOOLTIP_GAP - TOOLTIP_BG.width - TOOLTIP_FLIP_NUDGE;
        }

        TooltipPlacement {
            text: (x, y),
            detail: (x, y + TOOLTIP_LINE_OFFSET),
            background: (x - TOOLTIP_MARGIN.x, y - TOOLTIP_MARGIN.y),
        }
    }

    fn grow_transform(&self, progress: f64) -> String {
        format!("scaleY({})", progress)
    }

    fn grow_origin(&self) -> &'static str {
        "bottom"
    }
}

// ============================================================================
// ROTATED LAYOUT
// ============================================================================

/// Categorical axis vertical, bars grow rightward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedLayout {
    layout: Layout,
}

impl RotatedLayout {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    fn tooltip_x(&self) -> f64 {
        self.layout.width / 2.0
    }
}

impl Orientation for RotatedLayout {
    fn layout(&self) -> Layout {
        self.layout
    }

    // the axis group is translated by padding, so the range starts at zero
    fn position_range(&self) -> (f64, f64) {
        let Layout { height, padding, .. } = self.layout;
        (0.0, height - padding)
    }

    fn axis_value_range(&self) -> (f64, f64) {
        let Layout { width, padding, .. } = self.layout;
        (padding, width)
    }

    fn bar_geometry(&self, position: f64, length: f64, band: f64) -> BarGeometry {
        let padding = self.layout.padding;
        BarGeometry {
            x: padding,
            y: padding + position,
            width: length,
            height: band,
        }
    }

    fn category_axis(&self) -> AxisPlacement {
        AxisPlacement {
            orient: AxisOrient::Left,
            offset: (self.layout.padding, self.layout.padding),
        }
    }

    fn value_axis(&self) -> AxisPlacement {
        AxisPlacement {
            orient: AxisOrient::Top,
            offset: (0.0, self.layout.padding),
        }
    }

    fn source_label(&self) -> LabelPlacement {
        LabelPlacement {
            x: 5.0,
            y: self.layout.padding,
            transform: None,
            vertical: true,
        }
    }

    fn value_label(&self) -> LabelPlacement {
        LabelPlacement {
            x: self.layout.padding,
            y: 10.0,
            transform: None,
            vertical: false,
        }
    }

    fn tooltip_anchor(&self) -> TooltipPlacement {
        let x = self.tooltip_x();
        TooltipPlacement {
            text: (x, 0.0),
            detail: (x, TOOLTIP_LINE_OFFSET),
            background: (x - TOOLTIP_MARGIN.x, 0.0),
        }
    }

    fn place_tooltip(&self, bar: &BarGeometry) -> TooltipPlacement {
        let x = self.tooltip_x();
        let mut y = bar.y.trunc() - TOOLTIP_BG.height;
        if y - TOOLTIP_MARGIN.y <= self.layout.padding {
            y = y + TOOLTIP_BG.height + TOOLTIP_MARGIN.y + TOOLTIP_GAP;
        }

        TooltipPlacement {
            text: (x, y),
            detail: (x, y + TOOLTIP_LINE_OFFSET),
            background: (x - TOOLTIP_MARGIN.x, y - TOOLTIP_MARGIN.y),
        }
    }

    fn grow_transform(&self, progress: f64) -> String {
        format!("scaleX({})", progress)
    }

    fn grow_origin(&self) -> &'static str {
        "left"
    }
}

/// Pick the strategy for `layout`
pub fn select(layout: Layout) -> Arc<dyn Orientation> {
    if layout.rotate {
        Arc::new(RotatedLayout::new(layout))
    } else {
        Arc::new(NormalLayout::new(layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resolve;

    #[test]
    fn test_select_strategy() {
        assert_eq!(select(resolve(1200.0)).grow_origin(), "bottom");
        assert_eq!(select(resolve(400.0)).grow_origin(), "left");
    }

    #[test]
    fn test_normal_ranges() {
        let o = NormalLayout::new(Layout::default());
        assert_eq!(o.position_range(), (40.0, 960.0));
        assert_eq!(o.axis_value_range(), (460.0, 0.0));
        assert_eq!(o.bar_value_range(), (0.0, 460.0));
    }

    #[test]
    fn test_rotated_ranges() {
        let o = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        assert_eq!(o.position_range(), (0.0, 955.0));
        assert_eq!(o.axis_value_range(), (45.0, 400.0));
        assert_eq!(o.bar_value_range(), (0.0, 355.0));
    }

    #[test]
    fn test_bar_geometry() {
        let normal = NormalLayout::new(Layout::default());
        assert_eq!(
            normal.bar_geometry(100.0, 230.0, 5.0),
            BarGeometry { x: 100.0, y: 230.0, width: 5.0, height: 230.0 }
        );

        let rotated = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        assert_eq!(
            rotated.bar_geometry(100.0, 200.0, 4.0),
            BarGeometry { x: 45.0, y: 145.0, width: 200.0, height: 4.0 }
        );
    }

    #[test]
    fn test_axis_placement() {
        let normal = NormalLayout::new(Layout::default());
        assert_eq!(normal.category_axis().orient, AxisOrient::Bottom);
        assert_eq!(normal.category_axis().transform(), "translate(0, 460)");
        assert_eq!(normal.value_axis().transform(), "translate(40, 0)");

        let rotated = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        assert_eq!(rotated.category_axis().orient, AxisOrient::Left);
        assert_eq!(rotated.category_axis().transform(), "translate(45, 45)");
        assert_eq!(rotated.value_axis().orient, AxisOrient::Top);
        assert_eq!(rotated.value_axis().transform(), "translate(0, 45)");
    }

    #[test]
    fn test_labels() {
        let normal = NormalLayout::new(Layout::default());
        let source = normal.source_label();
        assert_eq!((source.x, source.y, source.vertical), (40.0, 495.0, false));
        assert!(normal.value_label().transform.is_some());

        let rotated = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        let source = rotated.source_label();
        assert_eq!((source.x, source.y, source.vertical), (5.0, 45.0, true));
        assert_eq!(rotated.value_label().transform, None);
    }

    #[test]
    fn test_grow_transform() {
        assert_eq!(NormalLayout::new(Layout::default()).grow_transform(0.0), "scaleY(0)");
        let rotated = RotatedLayout::new(Layout::new(400.0, 1000.0, 45.0, true));
        assert_eq!(rotated.grow_transform(1.0), "scaleX(1)");
    }
}
