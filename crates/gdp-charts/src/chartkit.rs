//! # chartkit
//!
//! Core chart primitives: scales, tick generation, path builder, formatters.
//! Implements Strategy pattern for flexible scale behaviors.

use chrono::{DateTime, Datelike, NaiveDate};
use gdp_core::date_to_millis;
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// TICK STEPS
// ============================================================================

/// Step between "nice" ticks covering `span` in roughly `count` intervals.
///
/// Picks 1, 2, 5 or 10 times a power of ten, using the same error
/// thresholds as D3's `tickIncrement`.
pub fn tick_step(span: f64, count: usize) -> f64 {
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }

    let rough_step = span / count as f64;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let error = rough_step / magnitude;

    let factor = if error >= 50.0_f64.sqrt() {
        10.0
    } else if error >= 10.0_f64.sqrt() {
        5.0
    } else if error >= 2.0_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * magnitude
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    pub fn range_tuple(self, range: (f64, f64)) -> Self {
        self.range(range.0, range.1)
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Tick values on round numbers inside the domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let step = tick_step(max - min, count);

        if step == 0.0 {
            return vec![min];
        }

        let first = (min / step).ceil() as i64;
        let last = (max / step).floor() as i64;

        (first..=last).map(|i| i as f64 * step).collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        // only an empty domain is degenerate; tiny spans still map linearly
        if d_max == d_min {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        self.nice_ticks(count)
    }
}

// ============================================================================
// TIME SCALE
// ============================================================================

/// Time scale (maps timestamps to pixel positions)
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (i64, i64), // Unix timestamps in milliseconds
    range: (f64, f64),
}

impl TimeScale {
    pub fn new() -> Self {
        Self {
            domain: (0, 1),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: i64, max: i64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    pub fn range_tuple(self, range: (f64, f64)) -> Self {
        self.range(range.0, range.1)
    }

    pub fn domain_bounds(&self) -> (i64, i64) {
        self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Scale timestamp to pixel position
    pub fn scale(&self, timestamp: i64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if d_max == d_min {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (timestamp - d_min) as f64 / (d_max - d_min) as f64;
        r_min + normalized * (r_max - r_min)
    }

    /// January 1st ticks on a nice year step, as `(timestamp, year)` pairs
    pub fn year_ticks(&self, count: usize) -> Vec<(i64, i32)> {
        let (d_min, d_max) = self.domain;
        let (Some(start), Some(end)) = (
            DateTime::from_timestamp_millis(d_min),
            DateTime::from_timestamp_millis(d_max),
        ) else {
            return Vec::new();
        };

        let (first_year, last_year) = (start.year(), end.year());
        let step = (tick_step(f64::from((last_year - first_year).max(1)), count) as i32).max(1);
        let first_tick = first_year + (step - first_year.rem_euclid(step)) % step;

        (first_tick..=last_year)
            .step_by(step as usize)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1).map(|d| (date_to_millis(d), year)))
            .filter(|&(ts, _)| ts >= d_min && ts <= d_max)
            .collect()
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(64),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{},{}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{}", y);
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Year of a Unix-millisecond timestamp, for time-axis labels
pub fn format_year(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.year().to_string())
        .unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================
