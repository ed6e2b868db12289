//! # gdp-charts
//!
//! D3.js-style SVG bar charting built with Leptos.
//! Renders quarterly GDP as bars with responsive orientation and hover
//! tooltips.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, time)
//! - Orientation (normal vs. rotated coordinate mapping)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, ticks, paths, formatters
//! - `layout` - Viewport-driven layout resolution
//! - `orientation` - Normal/rotated coordinate strategies
//! - `axis` - Axis rendering
//! - `bar_chart` - Scale building, bar geometry, chart component
//! - `tooltip` - Hover tooltip placement and rendering

pub mod axis;
pub mod bar_chart;
pub mod chartkit;
pub mod layout;
pub mod orientation;
pub mod tooltip;

pub use axis::*;
pub use bar_chart::*;
pub use chartkit::*;
pub use layout::*;
pub use orientation::*;
pub use tooltip::*;

// Re-export colors from gdp-core for convenience
pub use gdp_core::colors;
