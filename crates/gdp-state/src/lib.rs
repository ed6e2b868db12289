//! # gdp-state
//!
//! Reactive state management for the GDP bar chart.
//! Uses Leptos signals so the page re-renders when the dataset arrives or
//! loading fails.

use gdp_charts::Layout;
use gdp_core::{LoadStatus, ValidDataset};
use leptos::prelude::*;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// Layout resolved once at startup
    pub layout: Layout,
    /// Validated dataset, once fetched
    pub dataset: RwSignal<Option<ValidDataset>>,
    /// Dataset load state
    pub status: RwSignal<LoadStatus>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create new application state
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            dataset: RwSignal::new(None),
            status: RwSignal::new(LoadStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Load State
    // ========================================================================

    /// Mark the fetch as in flight
    pub fn set_loading(&self) {
        self.status.set(LoadStatus::Loading);
        self.error.set(None);
    }

    /// Store the fetched dataset
    pub fn set_loaded(&self, dataset: ValidDataset) {
        tracing::info!("Dataset loaded: {} entries", dataset.len());
        self.dataset.set(Some(dataset));
        self.status.set(LoadStatus::Loaded);
        self.error.set(None);
    }

    /// Record a load failure; the chart stays unrendered
    pub fn set_failed(&self, msg: impl Into<String>) {
        self.status.set(LoadStatus::Failed);
        self.set_error(msg);
    }

    pub fn is_loaded(&self) -> bool {
        self.status.get().is_loaded()
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Check if has error
    pub fn has_error(&self) -> bool {
        self.error.with(Option::is_some)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state(layout: Layout) -> AppState {
    let state = AppState::new(layout);
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_core::{Dataset, GdpEntry};

    fn dataset() -> ValidDataset {
        Dataset {
            name: "GDP".into(),
            description: String::new(),
            source_name: "FRED".into(),
            from_date: "1947-01-01".into(),
            to_date: "1947-04-01".into(),
            data: vec![GdpEntry::new("1947-01-01", 243.1), GdpEntry::new("1947-04-01", 246.3)],
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_load_lifecycle() {
        let state = AppState::default();
        assert_eq!(state.status.get_untracked(), LoadStatus::Idle);

        state.set_loading();
        assert_eq!(state.status.get_untracked(), LoadStatus::Loading);
        assert!(!state.is_loaded());

        state.set_loaded(dataset());
        assert!(state.is_loaded());
        assert!(!state.has_error());
        assert_eq!(state.dataset.with_untracked(|d| d.as_ref().map(|d| d.len())), Some(2));
    }

    #[test]
    fn test_failure_keeps_chart_unrendered() {
        let state = AppState::default();
        state.set_loading();
        state.set_failed("Could not load GDP data: server responded 500");

        assert_eq!(state.status.get_untracked(), LoadStatus::Failed);
        assert!(state.has_error());
        assert!(state.dataset.with_untracked(Option::is_none));

        state.clear_error();
        assert!(!state.has_error());
    }
}
