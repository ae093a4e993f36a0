//! Value range control: paired [0, 1] sliders with step 0.05.

use crate::state::{AppState, RANGE_STEP};
use dioxus::prelude::*;

/// Low/high slider pair bounding the value filter.
/// The pair is clamped on change so low <= high always holds.
#[component]
pub fn ValueRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let low = (state.range_low)();
    let high = (state.range_high)();

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(v) = evt.value().parse::<f64>() {
            let high = (state.range_high)();
            state.range_low.set(v.clamp(0.0, 1.0).min(high));
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(v) = evt.value().parse::<f64>() {
            let low = (state.range_low)();
            state.range_high.set(v.clamp(0.0, 1.0).max(low));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Score range: "
            }
            label {
                style: "font-size: 13px; display: flex; align-items: center; gap: 6px;",
                "From {low:.2}"
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "{RANGE_STEP}",
                    value: "{low}",
                    oninput: on_low_change,
                }
            }
            label {
                style: "font-size: 13px; display: flex; align-items: center; gap: 6px;",
                "To {high:.2}"
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "{RANGE_STEP}",
                    value: "{high}",
                    oninput: on_high_change,
                }
            }
        }
    }
}
