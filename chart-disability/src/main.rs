//! Disability Status by State, Age and Gender
//!
//! A US choropleth of the share of adults with any disability, linked to two
//! bar charts: hovering a state highlights it on the map and shows its age and
//! gender breakdown below.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/disability.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: load the `DataTable`, compose the `Dashboard`, seed the bar
//!    panels from its `DashboardView`, mount it on a `SignalSurface`, and draw
//!    the map from the serialized view via D3.js.
//! 4. On hover/leave: the D3 map calls back into Rust, the dashboard's
//!    selection changes, the map restyles and the bar facets re-render.

use std::rc::Rc;

use dioxus::prelude::*;
use dis_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FacetedBarChart, LoadingSpinner, SelectionBanner,
};
use dis_chart_ui::js_bridge;
use dis_chart_ui::state::AppState;
use dis_chart_ui::surface::SignalSurface;
use dis_core::DataTable;
use dis_dashboard::{Dashboard, DashboardConfig};

const DISABILITY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/disability.csv"));

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "disability-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("disability-root"))
        .launch(App);
}

/// Load the table, compose the dashboard and hook it up to the page.
fn start_dashboard(state: AppState, config: DashboardConfig) -> Result<Rc<Dashboard>, String> {
    let table = DataTable::from_csv_str(DISABILITY_CSV).map_err(|e| e.to_string())?;
    let dashboard = Rc::new(Dashboard::new(table, config));

    let mut bar_panels = state.bar_panels;
    bar_panels.set(dashboard.view().bottom);
    dashboard.mount(Rc::new(SignalSurface::new(state, MAP_CONTAINER_ID)));

    js_bridge::init_charts();
    let view_json = dashboard.to_json().map_err(|e| format!("{:#}", e))?;
    js_bridge::render_geo_map(MAP_CONTAINER_ID, &view_json);

    let on_hover = Rc::downgrade(&dashboard);
    let on_leave = Rc::downgrade(&dashboard);
    js_bridge::install_hover_handlers(
        move |key| {
            if let Some(d) = on_hover.upgrade() {
                d.hover(key);
            }
        },
        move || {
            if let Some(d) = on_leave.upgrade() {
                d.leave();
            }
        },
    );
    Ok(dashboard)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(DashboardConfig::default);
    let mut dashboard: Signal<Option<Rc<Dashboard>>> = use_signal(|| None);

    // ─── Load once on mount ───
    let startup_config = config.clone();
    use_effect(move || {
        match start_dashboard(state, startup_config.clone()) {
            Ok(d) => {
                if d.table().is_empty() {
                    state
                        .error_msg
                        .set(Some("No disability data available.".to_string()));
                }
                dashboard.set(Some(d));
            }
            Err(e) => {
                log::error!("[Disability] startup failed: {}", e);
                state.error_msg.set(Some(e));
            }
        }
        state.loading.set(false);
    });

    use_drop(|| js_bridge::destroy_chart(MAP_CONTAINER_ID));

    let active_name = (state.active_key)().and_then(|key| {
        dashboard
            .read()
            .as_ref()
            .and_then(|d| d.table().lookup(key).map(|r| r.state_name.clone()))
    });

    let no_rows = dashboard
        .read()
        .as_ref()
        .is_some_and(|d| d.table().is_empty());

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                if no_rows {
                    ErrorDisplay {
                        message: err.clone(),
                        hint: "Place the dataset at fixtures/disability.csv and rebuild.".to_string(),
                    }
                } else {
                    ErrorDisplay { message: err.clone() }
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: config.map.title.clone(),
                    subtitle: "Hover over a state to see who is affected by age and gender.".to_string(),
                }

                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    min_height: config.map.height + 80,
                    onleave: move |_| {
                        if let Some(d) = dashboard.peek().as_ref() {
                            d.leave();
                        }
                    },
                }

                SelectionBanner { state_name: active_name }

                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",
                    for panel in state.bar_panels.read().iter() {
                        FacetedBarChart {
                            key: "{panel.title}",
                            panel: panel.clone(),
                        }
                    }
                }
            }
        }
    }
}
