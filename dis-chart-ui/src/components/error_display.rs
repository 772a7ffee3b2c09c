//! Load and startup failures, shown above the dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Optional second line telling the reader how to recover
    pub hint: Option<String>,
}

/// Red alert box naming the failed data load, with an optional hint below.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load disability data: " }
            "{props.message}"
            if let Some(hint) = props.hint.as_ref() {
                div {
                    style: "margin-top: 4px; font-size: 12px; color: #8E2424;",
                    "{hint}"
                }
            }
        }
    }
}
