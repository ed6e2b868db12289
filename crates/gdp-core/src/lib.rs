//! # gdp-core
//!
//! Core domain types for the GDP bar chart.
//! Implements Strategy pattern for value formatting.

pub mod dataset;
pub mod error;

pub use dataset::*;
pub use error::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for GDP value formatting
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Tooltip formatter: `$<value> B`, value printed as-is
#[derive(Debug, Clone, Default)]
pub struct BillionsFormatter;

impl ValueFormatter for BillionsFormatter {
    fn format(&self, value: f64) -> String {
        format!("${} B", value)
    }
}

/// Axis tick formatter with thousands separators (e.g. `12,000`)
#[derive(Debug, Clone)]
pub struct GroupedNumberFormatter {
    pub separator: char,
}

impl Default for GroupedNumberFormatter {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl ValueFormatter for GroupedNumberFormatter {
    fn format(&self, value: f64) -> String {
        let rounded = value.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.separator);
            }
            grouped.push(ch);
        }

        format!("{}{}", sign, grouped)
    }
}

// ============================================================================
// LOAD STATUS
// ============================================================================

/// Dataset load FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading...",
            Self::Loaded => "Loaded",
            Self::Failed => "Failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "load-idle",
            Self::Loading => "load-loading",
            Self::Loaded => "load-loaded",
            Self::Failed => "load-failed",
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const BAR: &str = "#3b82f6";
    pub const TOOLTIP_BG: &str = "#1e293b";
    pub const TOOLTIP_TEXT: &str = "#f8fafc";
    pub const AXIS: &str = "#334155";
    pub const TEXT_MUTED: &str = "#64748b";
    pub const ERROR: &str = "#ef4444";
}
