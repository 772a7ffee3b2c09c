//! Loading indicator shown until the dashboard is mounted.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading disability data...".to_string())]
    pub label: String,
}

/// Centered status line, announced politely to screen readers.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            role: "status",
            aria_live: "polite",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.label}"
        }
    }
}
