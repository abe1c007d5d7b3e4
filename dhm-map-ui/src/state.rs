//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dhm_geo::GeographyFeature;
use dioxus::prelude::*;

use crate::controller::{MapController, TooltipState};

/// Shared application state for district map apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset controller (None until the map is initialized)
    pub controller: Signal<Option<MapController>>,
    /// Hover text, kept apart from the controller so hovering does not
    /// re-render anything that reads the dataset
    pub tooltip: Signal<TooltipState>,
    /// Decoded district boundaries
    pub features: Signal<Vec<GeographyFeature>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Last pointer position over the map, in client pixels
    pub pointer: Signal<(f64, f64)>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            controller: Signal::new(None),
            tooltip: Signal::new(TooltipState::default()),
            features: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            pointer: Signal::new((0.0, 0.0)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
