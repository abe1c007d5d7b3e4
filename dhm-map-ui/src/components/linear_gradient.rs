//! Gradient legend bar with min/max labels.

use dhm_data::GradientDescriptor;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LinearGradientProps {
    pub data: GradientDescriptor,
}

/// Horizontal bar blending `from_color` into `to_color`, labelled with
/// the dataset's minimum and maximum.
#[component]
pub fn LinearGradient(props: LinearGradientProps) -> Element {
    let background = props.data.css_background();
    let min = props.data.min_label();
    let max = props.data.max_label();

    rsx! {
        div {
            style: "margin: 8px auto; width: 60%;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 12px; color: #444;",
                span { "{min}" }
                span { "{max}" }
            }
            div {
                style: "height: 8px; border-radius: 2px; background: {background};",
            }
        }
    }
}
