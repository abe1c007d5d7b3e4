//! SVG choropleth of district boundaries.

use crate::config::MapConfig;
use crate::shapes::{project_districts, DistrictShape};
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DistrictMapProps {
    pub config: MapConfig,
}

/// Draws every decoded district, filled from the current dataset's scale.
///
/// Outlines are projected once per set of features. Fills are rejoined
/// whenever the controller's dataset changes; hover only touches the
/// tooltip signal and leaves this component alone.
#[component]
pub fn DistrictMap(props: DistrictMapProps) -> Element {
    let mut state = use_context::<AppState>();
    let config = &props.config;

    // The projection is fixed for the life of the map.
    let projection = config.projection();
    let districts = use_memo(move || project_districts(&state.features.read(), &projection));

    let shapes = match state.controller.read().as_ref() {
        Some(controller) => controller.shapes(&districts.read(), &config.default_fill),
        None => Vec::new(),
    };

    let css = config.district_css();
    let view_box = format!("0 0 {} {}", config.width, config.height);

    let on_move = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        state.pointer.set((point.x, point.y));
    };

    rsx! {
        style { "{css}" }
        svg {
            view_box: "{view_box}",
            width: "100%",
            onmousemove: on_move,
            for shape in shapes {
                DistrictPath {
                    key: "{shape.key}",
                    shape: shape.clone(),
                    stroke: config.stroke.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DistrictPathProps {
    pub shape: DistrictShape,
    pub stroke: String,
}

/// One district outline with hover handlers driving the tooltip.
#[component]
pub fn DistrictPath(props: DistrictPathProps) -> Element {
    let mut state = use_context::<AppState>();
    let hovered = props.shape.clone();

    let on_enter = move |_: MouseEvent| {
        state.tooltip.write().on_mouse_enter(&hovered);
    };

    let on_leave = move |_: MouseEvent| {
        state.tooltip.write().on_mouse_leave();
    };

    rsx! {
        path {
            class: "district",
            d: "{props.shape.path}",
            fill: "{props.shape.fill}",
            stroke: "{props.stroke}",
            stroke_width: "0.5",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
        }
    }
}
