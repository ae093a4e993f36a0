//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use whr_data::DashboardData;

/// Default region preselected in the multi-select.
pub const DEFAULT_REGION: &str = "East Asia";
/// Default lower bound of the value-range control.
pub const DEFAULT_RANGE_LOW: f64 = 0.2;
/// Default upper bound of the value-range control.
pub const DEFAULT_RANGE_HIGH: f64 = 0.8;
/// Step of the value-range control.
pub const RANGE_STEP: f64 = 0.05;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The immutable dataset (None until the startup pipeline has run)
    pub data: Signal<Option<DashboardData>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if startup failed
    pub error_msg: Signal<Option<String>>,
    /// Currently selected regions (multi-select)
    pub selected_regions: Signal<Vec<String>>,
    /// Lower bound of the value filter, in [0, 1]
    pub range_low: Signal<f64>,
    /// Upper bound of the value filter, in [0, 1]
    pub range_high: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_regions: Signal::new(vec![DEFAULT_REGION.to_string()]),
            range_low: Signal::new(DEFAULT_RANGE_LOW),
            range_high: Signal::new(DEFAULT_RANGE_HIGH),
        }
    }
}
