//! Tooltip that follows the pointer while a district is hovered.

use crate::state::AppState;
use dioxus::prelude::*;

/// Pixel offset from the pointer so the tooltip does not sit under it.
const POINTER_OFFSET: f64 = 12.0;

#[component]
pub fn MapTooltip() -> Element {
    let state = use_context::<AppState>();
    let content = state.tooltip.read().content().to_string();

    if content.is_empty() {
        return rsx! {};
    }

    let (x, y) = (state.pointer)();
    let left = x + POINTER_OFFSET;
    let top = y + POINTER_OFFSET;

    rsx! {
        div {
            style: "position: fixed; left: {left}px; top: {top}px; pointer-events: none; padding: 4px 8px; background: rgba(34, 34, 34, 0.9); color: #fff; font-size: 12px; border-radius: 3px; white-space: nowrap;",
            "{content}"
        }
    }
}
