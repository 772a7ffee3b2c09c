//! Mount point for the D3 map.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Fixed height in pixels reserved for the chart
    #[props(default = 560)]
    pub min_height: u32,
    /// Called when the pointer leaves the whole container
    pub onleave: Option<EventHandler<()>>,
}

/// A full-width container div for a D3.js chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let onleave = props.onleave;

    rsx! {
        div {
            style: "{style}",
            onmouseleave: move |_| {
                if let Some(handler) = onleave {
                    handler.call(());
                }
            },
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
