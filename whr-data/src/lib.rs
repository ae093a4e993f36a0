//! Data pipeline for World Happiness Report regional indicators.
//!
//! This crate turns the raw WHR 2021 CSV into the immutable dataset behind
//! the regional indicators dashboard:
//!
//! 1. [`loader`] parses the CSV (columns resolved by header name).
//! 2. [`pipeline`] aggregates per-region means, min-max scales each
//!    indicator into [0.1, 1.0], unpivots to long format, sorts, and
//!    derives the per-indicator region ordering index.
//! 3. [`dataset::DashboardData`] bundles the results into one read-only
//!    context built at startup, with a pure `filter` method the UI calls
//!    on every interaction.
//!
//! No UI or WASM dependencies; the crate compiles for native test runs and
//! for `wasm32-unknown-unknown` inside the chart app.

pub mod dataset;
pub mod loader;
pub mod models;
pub mod pipeline;

pub use dataset::DashboardData;
pub use models::{
    CountryRecord, Indicator, IndicatorValue, RegionAggregate, RegionSelection, ValueRange,
};
