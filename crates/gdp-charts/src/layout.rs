//! Responsive layout resolution
//!
//! Decides chart size, padding and orientation from the viewport width.
//! Resolved once at startup; the result is an immutable value threaded
//! through scale building, rendering and tooltip placement.

/// Resolved chart layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Categorical axis runs vertically when set
    pub rotate: bool,
}

impl Layout {
    pub const fn new(width: f64, height: f64, padding: f64, rotate: bool) -> Self {
        Self {
            width,
            height,
            padding,
            rotate,
        }
    }

    /// Rotated layouts are the narrow-screen fallback and warrant a notice
    pub fn needs_notice(&self) -> bool {
        self.rotate
    }

    /// Length of the categorical axis range
    pub fn categorical_length(&self) -> f64 {
        if self.rotate {
            self.height - self.padding
        } else {
            self.width - self.padding
        }
    }

    /// Length of the value axis range, used for bar magnitudes
    pub fn value_length(&self) -> f64 {
        if self.rotate {
            self.width - self.padding
        } else {
            self.height - self.padding
        }
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for Layout {
    fn default() -> Self {
        LayoutPolicy::default().base_layout()
    }
}

/// Layout constants and breakpoints
#[derive(Debug, Clone)]
pub struct LayoutPolicy {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Viewports narrower than this rotate the chart
    pub rotate_below: f64,
    /// Padding used by the rotated layout
    pub rotated_padding: f64,
    /// Fraction of the viewport the chart takes when shrunk
    pub shrink_ratio: f64,
    /// Delay before the narrow-screen notice, in milliseconds
    pub notice_delay_ms: u32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            padding: 40.0,
            rotate_below: 625.0,
            rotated_padding: 45.0,
            shrink_ratio: 0.8,
            notice_delay_ms: 5000,
        }
    }
}

impl LayoutPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn rotate_below(mut self, breakpoint: f64) -> Self {
        self.rotate_below = breakpoint;
        self
    }

    fn base_layout(&self) -> Layout {
        Layout::new(self.width, self.height, self.padding, false)
    }

    /// Resolve the layout for a viewport `viewport_width` pixels wide
    pub fn resolve(&self, viewport_width: f64) -> Layout {
        let mut layout = self.base_layout();

        // hidden frames and collapsed windows report 0
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            tracing::warn!("Unusable viewport width {}, using base layout", viewport_width);
            return layout;
        }

        if viewport_width < self.width {
            if viewport_width < self.rotate_below {
                layout.rotate = true;
                // rotated chart is as tall as the default chart is wide
                layout.height = self.width;
                layout.padding = self.rotated_padding;
            }
            layout.width = viewport_width * self.shrink_ratio;
        }

        // keep padding < min(width, height) for degenerate viewports
        let max_padding = layout.width.min(layout.height) / 2.0;
        if layout.padding >= max_padding {
            tracing::warn!(
                "Viewport {}px too narrow for padding {}, clamping",
                viewport_width,
                layout.padding
            );
            layout.padding = max_padding.max(0.0);
        }

        tracing::info!(
            "Resolved layout {}x{} (padding {}, rotate {})",
            layout.width,
            layout.height,
            layout.padding,
            layout.rotate
        );

        layout
    }
}

/// Resolve with the default policy
pub fn resolve(viewport_width: f64) -> Layout {
    LayoutPolicy::default().resolve(viewport_width)
}
