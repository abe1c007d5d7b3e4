//! Map title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    pub title: String,
}

#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    rsx! {
        h1 {
            style: "margin: 0; text-align: center; font-size: 24px;",
            "{props.title}"
        }
    }
}
