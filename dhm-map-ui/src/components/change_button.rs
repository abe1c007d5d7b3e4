//! "Change" button that regenerates the map data.

use crate::controller::MapController;
use crate::state::AppState;
use dioxus::prelude::*;

/// Replaces the dataset with a fresh one from the sample generator.
#[component]
pub fn ChangeButton() -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: MouseEvent| {
        let result = state
            .controller
            .write()
            .as_mut()
            .map(MapController::on_change_button_click);
        match result {
            Some(Ok(())) => state.error_msg.set(None),
            Some(Err(e)) => {
                log::error!("Failed to regenerate district data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to regenerate data: {}", e)));
            }
            None => log::warn!("Change clicked before the map was initialized"),
        }
    };

    rsx! {
        div {
            style: "text-align: center;",
            button {
                style: "margin-top: 16px;",
                onclick: on_click,
                "Change"
            }
        }
    }
}
