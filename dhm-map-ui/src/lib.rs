//! Shared Dioxus components and map rendering for district heat map apps.
//!
//! This crate provides:
//! - `config`: compile-time map settings (projection, palette, fills)
//! - `shapes`: pure mapping from boundaries + data to colored draw descriptors
//! - `controller`: the app's data/tooltip state machine, free of any UI types
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (map, legend, tooltip, etc.)

pub mod components;
pub mod config;
pub mod controller;
pub mod shapes;
pub mod state;
