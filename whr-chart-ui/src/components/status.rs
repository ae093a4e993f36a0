//! Status panels for the startup pipeline.
//!
//! The dashboard has exactly two non-chart states: the moment between
//! mount and the embedded CSV finishing its aggregate/normalize pass, and
//! a fatal startup failure (missing column, degenerate indicator column).

use dioxus::prelude::*;

/// Shown while the startup pipeline runs. The pipeline is synchronous and
/// fast, so this is rarely visible for more than a frame.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 48px; color: #666; font-size: 14px;",
            "Preparing regional indicators…"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Fatal startup errors land here; the page shows this box instead of the
/// controls and chart, matching the fail-fast contract of the pipeline.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 14px 18px; margin: 12px 0; background: #FDEDEC; color: #922B21; border-left: 4px solid #C0392B; border-radius: 2px;",
            strong { "Could not load the dashboard: " }
            "{props.message}"
        }
    }
}
