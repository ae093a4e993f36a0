//! Interactive Regional Indicators Dashboard
//!
//! Aggregates the World Happiness Report 2021 into per-region means of four
//! indicators, min-max scales each indicator to [0.1, 1.0], and renders a
//! D3.js stacked bar chart (x = indicator, color = region) that re-renders
//! on every change to the region multi-select or the score range sliders.
//!
//! Data flow:
//! 1. `build.rs` stages `world-happiness-report-2021.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: `DashboardData::from_csv` runs the whole pipeline once
//!    (load, aggregate, normalize, melt, sort, index). Failure here is
//!    fatal; the page shows an error instead of a chart.
//! 4. On filter change: re-filter the immutable long table and re-render.

use dioxus::prelude::*;
use whr_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, RegionSelector, ValueRangeSlider,
};
use whr_chart_ui::js_bridge;
use whr_chart_ui::state::AppState;
use whr_data::{DashboardData, Indicator, RegionSelection, ValueRange};

// Embed the happiness report CSV at compile time.
const HAPPINESS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/world-happiness-report-2021.csv"));

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "regional-indicators-chart";

const PAGE_TITLE: &str = "Interactive Regional Indicators Dashboard";

/// Fixed palette, assigned to regions in selector order and reused
/// cyclically should the dataset ever grow past ten regions.
const REGION_COLORS: [&str; 10] = [
    "#D9796F", "#E89C71", "#E8B47F", "#D9C386", "#A8C68F", "#85B9B0", "#7CA7C4", "#7F8DB7",
    "#6C7A9C", "#5D6A82",
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("regional-indicators-root"))
        .launch(App);
}

/// Indicator labels in x-axis order (ascending by label, matching the
/// sorted long table).
fn indicator_label_order() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Indicator::ALL.iter().map(|i| i.label()).collect();
    labels.sort();
    labels
}

/// Chart config JSON: palette, axis order, and the precomputed
/// per-indicator region ordering that controls stacking and legend order.
fn chart_config_json(data: &DashboardData) -> String {
    let colors: serde_json::Map<String, serde_json::Value> = data
        .regions()
        .iter()
        .enumerate()
        .map(|(i, region)| {
            (
                region.clone(),
                serde_json::Value::from(REGION_COLORS[i % REGION_COLORS.len()]),
            )
        })
        .collect();

    let region_order: serde_json::Map<String, serde_json::Value> = data
        .region_order_index()
        .iter()
        .map(|(ind, regions)| (ind.label().to_string(), serde_json::json!(regions)))
        .collect();

    serde_json::json!({
        "yAxisLabel": "Score",
        "legendTitle": "Region",
        "colors": colors,
        "indicatorOrder": indicator_label_order(),
        "regionOrder": region_order,
    })
    .to_string()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Run the startup pipeline once on mount ───
    use_effect(move || {
        match DashboardData::from_csv(HAPPINESS_CSV) {
            Ok(data) => {
                state.data.set(Some(data));
                state.loading.set(false);
                // Initialize D3 chart scripts (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Startup pipeline failed: {}", e);
                state.error_msg.set(Some(format!("Failed to load data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Filter by the controls and render the chart ───
    // Re-runs whenever loading, selected_regions, or the range change.
    use_effect(move || {
        let loading = (state.loading)();
        let selected = state.selected_regions.read().clone();
        let range = ValueRange::new((state.range_low)(), (state.range_high)());

        if loading {
            return;
        }

        // Clone data out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let data: DashboardData = match &*state.data.read() {
            Some(data) => data.clone(),
            None => return,
        };

        let rows = data.filter(&RegionSelection::Many(selected), range);
        // An empty result set is valid: the chart renders empty.
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = chart_config_json(&data);

        js_bridge::render_stacked_bar_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.error_msg.read().is_none() {
                ChartHeader {
                    title: PAGE_TITLE.to_string(),
                    subtitle: "Score, each indicator min-max scaled to [0.1, 1.0] across regions"
                        .to_string(),
                }

                RegionSelector {}
                ValueRangeSlider {}

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                }

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "Source: World Happiness Report 2021. Bars stack the selected regions per indicator."
                }
            }
        }
    }
}
