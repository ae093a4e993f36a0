//! Host element for the D3 stacked bar chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the JS bridge renders into; must be unique on the page.
    pub id: String,
}

/// The div the bar chart is drawn into.
///
/// `js_bridge::render_stacked_bar_chart` polls for this id, so the div has
/// to be mounted before a render call can take effect; each render
/// replaces the div's contents wholesale, which is what makes the
/// filter-change re-render an in-place swap. The reserved height keeps the
/// sliders from jumping while an empty result set renders an empty chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: 450px;",
        }
    }
}
