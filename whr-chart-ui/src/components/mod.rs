//! Reusable Dioxus RSX components for the WHR dashboard.

mod chart_container;
mod chart_header;
mod region_selector;
mod status;
mod value_range_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use region_selector::RegionSelector;
pub use status::{ErrorDisplay, LoadingSpinner};
pub use value_range_slider::ValueRangeSlider;
