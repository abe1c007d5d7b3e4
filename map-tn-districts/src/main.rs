//! Tamil Nadu District Heat Map
//!
//! Colors each district by its value on a nine-step quantile scale, shows
//! "{district}: {value}" while hovering, and redraws with fresh sample
//! values when "Change" is clicked.
//!
//! Data flow:
//! 1. `build.rs` copies `tamil-nadu.topo.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the topology into the WASM binary.
//! 3. On mount: decode the district boundaries and show the bundled table;
//!    the sample generator is seeded from the browser clock for "Change".
//! 4. Outlines are projected once; fills are rejoined by district id from a
//!    quantile scale rebuilt whenever the dataset changes.

use dhm_data::SampleDataGenerator;
use dhm_geo::{GeographyFeature, Topology};
use dhm_map_ui::components::{
    ChangeButton, DistrictMap, ErrorDisplay, LinearGradient, LoadingSpinner, MapHeader, MapTooltip,
};
use dhm_map_ui::config::MapConfig;
use dhm_map_ui::controller::MapController;
use dhm_map_ui::state::AppState;
use dioxus::prelude::*;

// Embed the district boundaries at compile time.
const TOPOLOGY_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/tamil-nadu.topo.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("district-map-root"))
        .launch(App);
}

/// Decode the boundaries and build the controller over the bundled table.
fn init_map(
    config: &MapConfig,
    seed: u64,
) -> anyhow::Result<(Vec<GeographyFeature>, MapController)> {
    let features = Topology::from_json(TOPOLOGY_JSON)?.features(&config.object_name)?;
    let generator = SampleDataGenerator::seeded(seed)?;
    let controller = MapController::new(generator, config.palette)?;
    Ok((features, controller))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(MapConfig::default);

    // ─── Decode boundaries and seed data once on mount ───
    let init_config = config.clone();
    use_effect(move || {
        let seed = js_sys::Date::now() as u64;
        match init_map(&init_config, seed) {
            Ok((features, controller)) => {
                log::info!(
                    "Map ready: {} districts, {} data records",
                    features.len(),
                    controller.data().len()
                );
                state.features.set(features);
                state.controller.set(Some(controller));
            }
            Err(e) => {
                log::error!("Failed to initialize map: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load district map: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Recomputed from the current dataset on every render.
    let gradient = state.controller.read().as_ref().map(MapController::gradient);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                MapHeader { title: config.title.clone() }
                MapTooltip {}
                DistrictMap { config: config.clone() }

                if let Some(data) = gradient {
                    LinearGradient { data }
                }

                ChangeButton {}
            }
        }
    }
}
