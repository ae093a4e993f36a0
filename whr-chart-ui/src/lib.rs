//! Shared Dioxus components and D3.js bridge for the WHR dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, slider, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
