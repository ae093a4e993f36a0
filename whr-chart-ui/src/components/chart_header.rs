//! Dashboard page heading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// One-line note on how the scores were derived, e.g. the min-max
    /// scaling applied per indicator. Omitted when empty.
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Page title with an optional methodology subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 2px 0 0 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
