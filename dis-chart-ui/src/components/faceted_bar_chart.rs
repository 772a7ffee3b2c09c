//! Horizontal bar facets drawn as inline SVG.
//!
//! One block per facet (state), one bar per bucket on the panel's x domain,
//! each with its percentage label to the right of the bar. A swatch legend of
//! the panel's color scale sits under the title.

use dioxus::prelude::*;
use dis_dashboard::BarPanel;

const LABEL_WIDTH: f64 = 56.0;
const TEXT_ROOM: f64 = 52.0;
const DEFAULT_ROW_HEIGHT: f64 = 22.0;
const AXIS_HEIGHT: f64 = 18.0;
const TICK_INTERVALS: usize = 4;

#[derive(Props, Clone, PartialEq)]
pub struct FacetedBarChartProps {
    /// Title, sizes, axis and facets of one bottom-row chart
    pub panel: BarPanel,
}

#[component]
pub fn FacetedBarChart(props: FacetedBarChartProps) -> Element {
    let panel = &props.panel;
    let bar_span = panel.width as f64;
    let svg_width = LABEL_WIDTH + bar_span + TEXT_ROOM;
    let ticks: Vec<(f64, String)> = panel
        .ticks(TICK_INTERVALS)
        .into_iter()
        .map(|t| (LABEL_WIDTH + t.position * bar_span, t.label))
        .collect();

    rsx! {
        div {
            style: "flex: 1; min-width: 0;",
            h4 {
                style: "margin: 0 0 6px 0; font-size: 14px;",
                "{panel.title}"
            }
            div {
                style: "display: flex; gap: 10px; font-size: 11px; margin-bottom: 6px;",
                for (label, color) in panel.color_scale.iter() {
                    span {
                        key: "swatch-{label}",
                        span {
                            style: "display: inline-block; width: 10px; height: 10px; margin-right: 3px; background: {color};",
                        }
                        "{label}"
                    }
                }
            }
            for facet in panel.facets.iter() {
                {
                    let n = facet.bars.len().max(1) as f64;
                    let row_h = panel
                        .facet_height
                        .map(|h| h as f64 / n)
                        .unwrap_or(DEFAULT_ROW_HEIGHT);
                    let bars_h = row_h * n;
                    let svg_height = bars_h + AXIS_HEIGHT;
                    let axis_end = LABEL_WIDTH + bar_span;
                    let tick_y = bars_h + 13.0;
                    rsx! {
                        div {
                            key: "{facet.state_name}",
                            style: "margin-bottom: 8px;",
                            div {
                                style: "font-size: 12px; font-weight: bold; margin-bottom: 2px;",
                                "{facet.state_name}"
                            }
                            svg {
                                width: "{svg_width}",
                                height: "{svg_height}",
                                view_box: "0 0 {svg_width} {svg_height}",
                                for (i, bar) in facet.bars.iter().enumerate() {
                                    {
                                        let y = i as f64 * row_h;
                                        let len = panel.position(bar.fraction) * bar_span;
                                        let text_x = LABEL_WIDTH + len + 7.0;
                                        let mid = y + row_h / 2.0;
                                        let label_x = LABEL_WIDTH - 6.0;
                                        let rect_y = y + 1.0;
                                        let rect_h = (row_h - 2.0).max(1.0);
                                        rsx! {
                                            text {
                                                key: "label-{bar.label}",
                                                x: "{label_x}",
                                                y: "{mid}",
                                                text_anchor: "end",
                                                dominant_baseline: "middle",
                                                font_size: "11",
                                                "{bar.label}"
                                            }
                                            rect {
                                                key: "bar-{bar.label}",
                                                x: "{LABEL_WIDTH}",
                                                y: "{rect_y}",
                                                width: "{len}",
                                                height: "{rect_h}",
                                                fill: "{bar.color}",
                                            }
                                            text {
                                                key: "value-{bar.label}",
                                                x: "{text_x}",
                                                y: "{mid}",
                                                dominant_baseline: "middle",
                                                font_size: "11",
                                                fill: "black",
                                                "{bar.text}"
                                            }
                                        }
                                    }
                                }
                                line {
                                    x1: "{LABEL_WIDTH}",
                                    x2: "{axis_end}",
                                    y1: "{bars_h}",
                                    y2: "{bars_h}",
                                    stroke: "#999",
                                }
                                for (x, label) in ticks.iter() {
                                    text {
                                        key: "tick-{label}",
                                        x: "{x}",
                                        y: "{tick_y}",
                                        text_anchor: "middle",
                                        font_size: "9",
                                        fill: "#666",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
