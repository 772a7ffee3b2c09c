//! One-line status naming the hovered state.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectionBannerProps {
    /// Name of the hovered state, if any
    #[props(!optional)]
    pub state_name: Option<String>,
}

#[component]
pub fn SelectionBanner(props: SelectionBannerProps) -> Element {
    let text = match &props.state_name {
        Some(name) => format!("Showing {}", name),
        None => "Hover over a state to compare age and gender".to_string(),
    };

    rsx! {
        p {
            style: "font-size: 12px; color: #555; text-align: center; margin: 4px 0 12px 0;",
            "{text}"
        }
    }
}
