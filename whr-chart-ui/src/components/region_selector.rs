//! Multi-select region filter.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox group over all distinct regions in the dataset.
/// Toggling a box adds or removes the region from `selected_regions`.
#[component]
pub fn RegionSelector() -> Element {
    let state = use_context::<AppState>();
    let regions: Vec<String> = state
        .data
        .read()
        .as_ref()
        .map(|d| d.regions().to_vec())
        .unwrap_or_default();
    let selected = state.selected_regions.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold; margin-right: 8px;",
                "Regions: "
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 16px; margin-top: 4px;",
                for region in regions {
                    RegionCheckbox {
                        region: region.clone(),
                        checked: selected.iter().any(|r| r == &region),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RegionCheckboxProps {
    region: String,
    checked: bool,
}

#[component]
fn RegionCheckbox(props: RegionCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let region = props.region.clone();

    let on_change = move |evt: Event<FormData>| {
        let mut selected = state.selected_regions.read().clone();
        if evt.checked() {
            if !selected.iter().any(|r| r == &region) {
                selected.push(region.clone());
            }
        } else {
            selected.retain(|r| r != &region);
        }
        state.selected_regions.set(selected);
    };

    rsx! {
        label {
            style: "font-size: 13px; display: flex; align-items: center; gap: 4px;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            "{props.region}"
        }
    }
}
