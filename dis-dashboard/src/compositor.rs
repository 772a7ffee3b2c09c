//! The composed dashboard: map on top, age and gender bars side by side below.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use dis_core::{DataTable, JoinKey, Row};
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::faceted_bar::{AgeView, BarPanel, BarViewKind, GenderView};
use crate::geo_view::{GeoView, MapPanel};
use crate::selection::{SelectionState, SubscriptionId};
use crate::surface::RenderSurface;

/// The whole dashboard as one serializable unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub active_key: Option<JoinKey>,
    pub map: MapPanel,
    /// Left to right: age, then gender.
    pub bottom: Vec<BarPanel>,
}

/// Owns the table, the single selection and the three views.
///
/// Each dashboard has its own [`SelectionState`], so several can live in one
/// process without sharing hover state.
pub struct Dashboard {
    table: Rc<DataTable>,
    selection: SelectionState,
    geo: Rc<GeoView>,
    age: Rc<AgeView>,
    gender: Rc<GenderView>,
    subscriptions: RefCell<Vec<SubscriptionId>>,
}

impl Dashboard {
    pub fn new(table: DataTable, config: DashboardConfig) -> Self {
        let table = Rc::new(table);
        let selection = SelectionState::new();
        let geo = GeoView::new(Rc::clone(&table), selection.clone(), config.map);
        let age = AgeView::new(
            BarViewKind::Age,
            Rc::clone(&table),
            selection.clone(),
            config.age,
        );
        let gender = GenderView::new(
            BarViewKind::Gender,
            Rc::clone(&table),
            selection.clone(),
            config.gender,
        );
        log::info!(
            "[Disability] dashboard: composed views over {} states",
            table.len()
        );
        Self {
            table,
            selection,
            geo: Rc::new(geo),
            age: Rc::new(age),
            gender: Rc::new(gender),
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn geo(&self) -> &GeoView {
        &self.geo
    }

    pub fn age(&self) -> &AgeView {
        &self.age
    }

    pub fn gender(&self) -> &GenderView {
        &self.gender
    }

    /// The row of the hovered state, if any.
    pub fn active_row(&self) -> Option<&Row> {
        self.selection.current().and_then(|k| self.table.lookup(k))
    }

    /// Wire every view to `surface` and draw the current state once.
    ///
    /// Listeners run in a fixed order on each change: map restyle, age bars,
    /// gender bars. Mounting again replaces the previous surface.
    pub fn mount(&self, surface: Rc<dyn RenderSurface>) {
        self.unmount();
        let mut subscriptions = self.subscriptions.borrow_mut();

        let geo = Rc::clone(&self.geo);
        let target = Rc::clone(&surface);
        subscriptions.push(
            self.selection
                .subscribe(move |active| target.restyle_geo(&geo.styles_for(active))),
        );

        let age = Rc::clone(&self.age);
        let target = Rc::clone(&surface);
        subscriptions.push(self.selection.subscribe(move |active| {
            target.render_facets(age.kind(), &age.facets_for(active))
        }));

        let gender = Rc::clone(&self.gender);
        let target = Rc::clone(&surface);
        subscriptions.push(self.selection.subscribe(move |active| {
            target.render_facets(gender.kind(), &gender.facets_for(active))
        }));
        drop(subscriptions);

        surface.restyle_geo(&self.geo.styles());
        surface.render_facets(self.age.kind(), &self.age.render());
        surface.render_facets(self.gender.kind(), &self.gender.render());
    }

    /// Detach from the current surface, if any.
    pub fn unmount(&self) {
        for id in self.subscriptions.borrow_mut().drain(..) {
            self.selection.unsubscribe(id);
        }
    }

    pub fn hover(&self, key: JoinKey) {
        self.geo.on_hover(key);
    }

    pub fn leave(&self) {
        self.geo.on_leave();
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            active_key: self.selection.current(),
            map: self.geo.panel(),
            bottom: vec![self.age.panel(), self.gender.panel()],
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.view()).context("failed to serialize dashboard view")
    }
}

impl Drop for Dashboard {
    // Listeners hold Rc handles to the views, which hold the selection.
    fn drop(&mut self) {
        self.unmount();
    }
}
