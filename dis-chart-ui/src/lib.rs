//! Dioxus components and D3.js bridge for the disability dashboard.
//!
//! This crate provides:
//! - `js_bridge`: D3.js choropleth rendering and hover callbacks via `js_sys`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `surface`: a `RenderSurface` that writes selection output into `AppState`
//!   and restyles the map
//! - `components`: reusable RSX components (bar facets, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod surface;
