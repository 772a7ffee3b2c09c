//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dis_core::JoinKey;
use dis_dashboard::BarPanel;

/// Shared application state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Join key of the hovered state
    pub active_key: Signal<Option<JoinKey>>,
    /// Bottom-row bar panels, left to right, with their current facets
    pub bar_panels: Signal<Vec<BarPanel>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_key: Signal::new(None),
            bar_panels: Signal::new(Vec::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
