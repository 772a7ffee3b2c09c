//! Choropleth model for the US states map.
//!
//! The map draws one shape per row, filled by the configured category's
//! percentage. It is also the only source of hover events: entering a shape
//! makes its state active, leaving the map clears the selection. Emphasis is
//! computed from the selection alone, so a selection set by any other means
//! highlights the same shape the bar charts are filtered to.

use std::rc::Rc;

use dis_core::{AgeBucket, DataTable, DisabilityCategory, Gender, JoinKey, Row};
use serde::Serialize;

use crate::color::SequentialScale;
use crate::config::MapConfig;
use crate::format::fixed1;
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Active,
    Inactive,
}

/// Emphasis of the shape `row_key` given the current active key.
pub fn emphasis(row_key: JoinKey, active: Option<JoinKey>) -> Emphasis {
    if active == Some(row_key) {
        Emphasis::Active
    } else {
        Emphasis::Inactive
    }
}

/// Per-shape style that changes with the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeStyle {
    pub join_key: JoinKey,
    pub emphasis: Emphasis,
    pub opacity: f64,
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipField {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoShape {
    pub join_key: JoinKey,
    pub state_name: String,
    /// Percentage of the color category.
    pub value: f64,
    pub fill: String,
    pub tooltip: Vec<TooltipField>,
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub orient: &'static str,
    pub format: &'static str,
    pub domain: (f64, f64),
    pub stops: Vec<LegendStop>,
}

/// Style for topology shapes that have no data row. They can never be the
/// active key, so they always carry the inactive emphasis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoDataStyle {
    pub fill: String,
    pub opacity: f64,
    pub stroke: String,
}

/// Everything the host needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPanel {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub projection: String,
    pub topology_url: String,
    pub topology_object: String,
    pub legend: Option<Legend>,
    pub shapes: Vec<GeoShape>,
    pub no_data: NoDataStyle,
}

const LEGEND_STOPS: usize = 5;
const NO_DATA_FILL: &str = "#eeeeee";

pub struct GeoView {
    table: Rc<DataTable>,
    selection: SelectionState,
    config: MapConfig,
    scale: Option<SequentialScale>,
}

impl GeoView {
    pub fn new(table: Rc<DataTable>, selection: SelectionState, config: MapConfig) -> Self {
        let scale = table
            .category_extent(config.color_category)
            .map(|domain| SequentialScale::new(domain, config.color_scheme));
        Self {
            table,
            selection,
            config,
            scale,
        }
    }

    /// Pointer entered the shape `key`. Shapes with no data row clear the
    /// selection so the active key always names a row.
    pub fn on_hover(&self, key: JoinKey) {
        if self.table.contains(key) {
            self.selection.set_active(key);
        } else {
            log::debug!("[Disability] geo: hover on shape {} without data", key);
            self.selection.clear();
        }
    }

    /// Pointer left a shape or the map surface.
    pub fn on_leave(&self) {
        self.selection.clear();
    }

    pub fn style_for(&self, key: JoinKey, active: Option<JoinKey>) -> ShapeStyle {
        let emphasis = emphasis(key, active);
        let (opacity, stroke) = match emphasis {
            Emphasis::Active => (self.config.active_opacity, &self.config.active_stroke),
            Emphasis::Inactive => (self.config.inactive_opacity, &self.config.inactive_stroke),
        };
        ShapeStyle {
            join_key: key,
            emphasis,
            opacity,
            stroke: stroke.clone(),
        }
    }

    /// Styles of every shape for the given active key, in row order.
    pub fn styles_for(&self, active: Option<JoinKey>) -> Vec<ShapeStyle> {
        self.table
            .keys()
            .map(|key| self.style_for(key, active))
            .collect()
    }

    /// Styles of every shape for the current selection.
    pub fn styles(&self) -> Vec<ShapeStyle> {
        self.styles_for(self.selection.current())
    }

    pub fn shapes(&self) -> Vec<GeoShape> {
        let active = self.selection.current();
        let category = self.config.color_category;
        self.table
            .rows()
            .iter()
            .map(|row| {
                let value = row.category(category);
                GeoShape {
                    join_key: row.join_key,
                    state_name: row.state_name.clone(),
                    value,
                    fill: self
                        .scale
                        .map(|s| s.color(value))
                        .unwrap_or_default(),
                    tooltip: tooltip(row),
                    style: self.style_for(row.join_key, active),
                }
            })
            .collect()
    }

    pub fn legend(&self) -> Option<Legend> {
        self.scale.map(|scale| Legend {
            title: self.config.legend_title.clone(),
            orient: "top",
            format: ".1f",
            domain: scale.domain,
            stops: scale
                .stops(LEGEND_STOPS)
                .into_iter()
                .map(|(value, color)| LegendStop { value, color })
                .collect(),
        })
    }

    pub fn panel(&self) -> MapPanel {
        MapPanel {
            title: self.config.title.clone(),
            width: self.config.width,
            height: self.config.height,
            projection: self.config.projection.clone(),
            topology_url: self.config.topology_url.clone(),
            topology_object: self.config.topology_object.clone(),
            legend: self.legend(),
            shapes: self.shapes(),
            no_data: self.no_data_style(),
        }
    }

    pub fn no_data_style(&self) -> NoDataStyle {
        NoDataStyle {
            fill: NO_DATA_FILL.to_string(),
            opacity: self.config.inactive_opacity,
            stroke: self.config.inactive_stroke.clone(),
        }
    }
}

/// Tooltip rows for one state: name, every category, every bucket.
pub fn tooltip(row: &Row) -> Vec<TooltipField> {
    let mut fields = Vec::with_capacity(13);
    fields.push(TooltipField {
        title: "State".to_string(),
        value: row.state_name.clone(),
    });
    for category in DisabilityCategory::ALL {
        fields.push(TooltipField {
            title: format!("{} (%)", category.column()),
            value: fixed1(row.category(category)),
        });
    }
    for bucket in AgeBucket::ALL {
        fields.push(TooltipField {
            title: format!("Age {} (%)", bucket.column()),
            value: fixed1(row.age(bucket)),
        });
    }
    for gender in Gender::ALL {
        fields.push(TooltipField {
            title: format!("{} (%)", gender.column()),
            value: fixed1(row.gender(gender)),
        });
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Rc<DataTable> {
        let csv = "state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female\n\
                   Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n\
                   Utah,49,21.1,12.9,5.9,9.8,4.2,2.9,6.6,15.0,21.1,35.2,20.3,24.6\n\
                   Maine,23,31.1,14.8,7.4,12.6,4.6,3.5,8.1,16.2,24.4,37.0,27.5,29.2\n";
        Rc::new(DataTable::from_csv_str(csv).unwrap())
    }

    fn view() -> (GeoView, SelectionState) {
        let selection = SelectionState::new();
        let geo = GeoView::new(table(), selection.clone(), MapConfig::default());
        (geo, selection)
    }

    fn active_keys(styles: &[ShapeStyle]) -> Vec<JoinKey> {
        styles
            .iter()
            .filter(|s| s.emphasis == Emphasis::Active)
            .map(|s| s.join_key)
            .collect()
    }

    #[test]
    fn emphasis_is_pure() {
        assert_eq!(emphasis(39, Some(39)), Emphasis::Active);
        assert_eq!(emphasis(39, Some(49)), Emphasis::Inactive);
        assert_eq!(emphasis(39, None), Emphasis::Inactive);
    }

    #[test]
    fn exactly_one_active_shape_for_each_valid_key() {
        let (geo, selection) = view();
        for key in [39, 49, 23] {
            selection.set_active(key);
            let styles = geo.styles();
            assert_eq!(active_keys(&styles), vec![key]);
            for style in &styles {
                if style.join_key == key {
                    assert_eq!(style.opacity, 1.0);
                    assert_eq!(style.stroke, "black");
                } else {
                    assert_eq!(style.opacity, 0.2);
                    assert_eq!(style.stroke, "white");
                }
            }
        }
    }

    #[test]
    fn nothing_active_without_selection() {
        let (geo, _) = view();
        assert!(active_keys(&geo.styles()).is_empty());
    }

    #[test]
    fn unknown_key_highlights_nothing() {
        let (geo, selection) = view();
        selection.set_active(999);
        assert!(active_keys(&geo.styles()).is_empty());
    }

    #[test]
    fn shapes_without_data_match_inactive_style() {
        let (geo, selection) = view();
        selection.set_active(39);
        let no_data = geo.panel().no_data;
        let dimmed = geo.style_for(49, selection.current());
        assert_eq!(no_data.opacity, dimmed.opacity);
        assert_eq!(no_data.stroke, dimmed.stroke);
        assert_eq!(no_data.fill, "#eeeeee");
    }

    #[test]
    fn hover_and_leave_drive_selection() {
        let (geo, selection) = view();
        geo.on_hover(49);
        assert_eq!(selection.current(), Some(49));
        geo.on_leave();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn hover_on_shape_without_row_clears() {
        let (geo, selection) = view();
        geo.on_hover(39);
        geo.on_hover(72);
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn fill_follows_color_category_extent() {
        let (geo, _) = view();
        let shapes = geo.shapes();
        assert_eq!(shapes.len(), 3);
        let utah = shapes.iter().find(|s| s.join_key == 49).unwrap();
        let maine = shapes.iter().find(|s| s.join_key == 23).unwrap();
        assert_eq!(utah.fill, "#f7fbff");
        assert_eq!(maine.fill, "#08306b");
        assert_eq!(maine.value, 31.1);
    }

    #[test]
    fn tooltip_exposes_every_field() {
        let table = table();
        let fields = tooltip(table.lookup(39).unwrap());
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0].value, "Ohio");
        assert_eq!(fields[1].title, "Any Disability (%)");
        assert_eq!(fields[1].value, "29.1");
        assert_eq!(fields[8].title, "Age 18-44 (%)");
        assert_eq!(fields[12].title, "Female (%)");
        assert_eq!(fields[12].value, "31.9");
    }

    #[test]
    fn legend_covers_domain() {
        let (geo, _) = view();
        let legend = geo.legend().unwrap();
        assert_eq!(legend.domain, (21.1, 31.1));
        assert_eq!(legend.stops.len(), 5);
        assert_eq!(legend.title, "Statewide Disability Estimate (%)");
    }

    #[test]
    fn empty_table_has_no_legend() {
        let selection = SelectionState::new();
        let geo = GeoView::new(Rc::new(DataTable::default()), selection, MapConfig::default());
        assert!(geo.legend().is_none());
        assert!(geo.panel().shapes.is_empty());
    }
}
