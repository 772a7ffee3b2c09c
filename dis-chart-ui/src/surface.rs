//! Bridges dashboard selection output into Dioxus signals and the D3 map.

use dioxus::prelude::WritableExt;
use dis_core::JoinKey;
use dis_dashboard::{BarPanel, BarViewKind, Emphasis, Facet, RenderSurface, ShapeStyle};

use crate::js_bridge;
use crate::state::AppState;

/// Map shapes are restyled in place through the JS bridge; bar facets are
/// written into the matching [`BarPanel`] signal and drawn by
/// [`FacetedBarChart`](crate::components::FacetedBarChart).
pub struct SignalSurface {
    state: AppState,
    map_container_id: String,
}

impl SignalSurface {
    pub fn new(state: AppState, map_container_id: impl Into<String>) -> Self {
        Self {
            state,
            map_container_id: map_container_id.into(),
        }
    }
}

fn active_key(styles: &[ShapeStyle]) -> Option<JoinKey> {
    styles
        .iter()
        .find(|s| s.emphasis == Emphasis::Active)
        .map(|s| s.join_key)
}

fn replace_facets(panels: &mut [BarPanel], view: BarViewKind, facets: &[Facet]) {
    for panel in panels.iter_mut().filter(|p| p.kind == view) {
        panel.facets = facets.to_vec();
    }
}

impl RenderSurface for SignalSurface {
    fn restyle_geo(&self, styles: &[ShapeStyle]) {
        let mut active = self.state.active_key;
        active.set(active_key(styles));
        match serde_json::to_string(styles) {
            Ok(json) => js_bridge::restyle_geo_map(&self.map_container_id, &json),
            Err(e) => log::warn!("[Disability] failed to serialize map styles: {}", e),
        }
    }

    fn render_facets(&self, view: BarViewKind, facets: &[Facet]) {
        let mut panels = self.state.bar_panels;
        replace_facets(&mut panels.write(), view, facets);
    }
}
