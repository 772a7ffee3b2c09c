//! Faceted bar charts filtered to the hovered state.
//!
//! A [`FacetedBarView`] is parameterized by a bucket set (age or gender). For
//! the active key it melts the matching row into one bar per bucket and groups
//! the bars into one facet per state. With no active key, or a key that names
//! no row, it renders no facets at all.

use std::marker::PhantomData;
use std::rc::Rc;

use dis_core::{melt, AgeBucket, Bucket, DataTable, Gender, JoinKey, MeltedRow};
use serde::Serialize;

use crate::color::OrdinalScale;
use crate::config::BarConfig;
use crate::format::{percent_label, with_pattern};
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarViewKind {
    Age,
    Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    /// Bar length on a fixed [0, 1] axis.
    pub fraction: f64,
    /// Text drawn beside the bar, e.g. `"12.3%"`.
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facet {
    pub state_name: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPanel {
    pub kind: BarViewKind,
    pub title: String,
    pub width: u32,
    pub facet_height: Option<u32>,
    pub x_domain: (f64, f64),
    pub axis_format: &'static str,
    /// (bucket label, color) for this panel only.
    pub color_scale: Vec<(String, String)>,
    pub facets: Vec<Facet>,
}

/// One labeled tick on a bar panel's x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Position along the bar span, 0 at the left edge and 1 at the right.
    pub position: f64,
    pub label: String,
}

impl BarPanel {
    /// Where `value` falls along the bar span, clamped to [0, 1].
    pub fn position(&self, value: f64) -> f64 {
        let (lo, hi) = self.x_domain;
        if hi <= lo {
            return 0.0;
        }
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    }

    /// `intervals + 1` evenly spaced ticks across `x_domain`.
    pub fn ticks(&self, intervals: usize) -> Vec<AxisTick> {
        let (lo, hi) = self.x_domain;
        let n = intervals.max(1);
        (0..=n)
            .map(|i| {
                let t = i as f64 / n as f64;
                AxisTick {
                    position: t,
                    label: with_pattern(lo + t * (hi - lo), self.axis_format),
                }
            })
            .collect()
    }
}

pub struct FacetedBarView<B: Bucket> {
    kind: BarViewKind,
    table: Rc<DataTable>,
    selection: SelectionState,
    config: BarConfig,
    colors: OrdinalScale,
    _buckets: PhantomData<B>,
}

pub type AgeView = FacetedBarView<AgeBucket>;
pub type GenderView = FacetedBarView<Gender>;

impl<B: Bucket> FacetedBarView<B> {
    pub fn new(
        kind: BarViewKind,
        table: Rc<DataTable>,
        selection: SelectionState,
        config: BarConfig,
    ) -> Self {
        let colors = OrdinalScale::new(B::BUCKETS.iter().map(|b| b.label()), config.color_scheme);
        Self {
            kind,
            table,
            selection,
            config,
            colors,
            _buckets: PhantomData,
        }
    }

    pub fn kind(&self) -> BarViewKind {
        self.kind
    }

    /// Melted rows for `active`: empty when nothing is selected or the key
    /// names no row.
    pub fn derive(&self, active: Option<JoinKey>) -> Vec<MeltedRow> {
        let Some(key) = active else {
            return Vec::new();
        };
        self.table
            .rows()
            .iter()
            .filter(|row| row.join_key == key)
            .flat_map(melt::<B>)
            .collect()
    }

    pub fn facets_for(&self, active: Option<JoinKey>) -> Vec<Facet> {
        if let Some(key) = active {
            if !self.table.contains(key) {
                log::debug!(
                    "[Disability] {:?} bars: no row for active key {}",
                    self.kind,
                    key
                );
            }
        }

        let mut facets: Vec<Facet> = Vec::new();
        for melted in self.derive(active) {
            let bar = Bar {
                label: melted.bucket_label.to_string(),
                fraction: melted.percentage,
                text: percent_label(melted.percentage),
                color: self
                    .colors
                    .color(melted.bucket_label)
                    .unwrap_or_default()
                    .to_string(),
            };
            match facets
                .iter_mut()
                .find(|f| f.state_name == melted.state_name)
            {
                Some(facet) => facet.bars.push(bar),
                None => facets.push(Facet {
                    state_name: melted.state_name,
                    bars: vec![bar],
                }),
            }
        }
        facets
    }

    /// Facets for the current selection.
    pub fn render(&self) -> Vec<Facet> {
        self.facets_for(self.selection.current())
    }

    pub fn panel(&self) -> BarPanel {
        BarPanel {
            kind: self.kind,
            title: self.config.title.clone(),
            width: self.config.width,
            facet_height: self.config.facet_height,
            x_domain: (0.0, 1.0),
            axis_format: ".0%",
            color_scale: self.colors.entries().to_vec(),
            facets: self.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female\n\
                       Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n\
                       Utah,49,21.1,12.9,5.9,9.8,4.2,2.9,6.6,15.0,21.1,35.2,20.3,24.6\n";

    fn views() -> (AgeView, GenderView, SelectionState) {
        let table = Rc::new(DataTable::from_csv_str(CSV).unwrap());
        let selection = SelectionState::new();
        let age = AgeView::new(
            BarViewKind::Age,
            Rc::clone(&table),
            selection.clone(),
            BarConfig::age(),
        );
        let gender = GenderView::new(
            BarViewKind::Gender,
            table,
            selection.clone(),
            BarConfig::gender(),
        );
        (age, gender, selection)
    }

    #[test]
    fn active_state_renders_one_facet() {
        let (age, _, selection) = views();
        selection.set_active(39);
        let facets = age.render();
        assert_eq!(facets.len(), 1);
        let ohio = &facets[0];
        assert_eq!(ohio.state_name, "Ohio");

        let labels: Vec<&str> = ohio.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["18-44", "45-64", "65+"]);
        let fractions: Vec<f64> = ohio.bars.iter().map(|b| b.fraction).collect();
        assert_eq!(fractions, vec![12.3 / 100.0, 25.6 / 100.0, 40.1 / 100.0]);
        for (got, want) in fractions.iter().zip([0.123, 0.256, 0.401]) {
            assert!((got - want).abs() < 1e-12);
        }
        let texts: Vec<&str> = ohio.bars.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["12.3%", "25.6%", "40.1%"]);
    }

    #[test]
    fn no_selection_renders_nothing() {
        let (age, gender, _) = views();
        assert!(age.render().is_empty());
        assert!(gender.render().is_empty());
        assert!(age.derive(None).is_empty());
    }

    #[test]
    fn clear_after_selection_renders_nothing() {
        let (age, _, selection) = views();
        selection.set_active(39);
        selection.clear();
        assert!(age.render().is_empty());
    }

    #[test]
    fn lookup_miss_renders_nothing() {
        let (age, gender, selection) = views();
        selection.set_active(999);
        assert!(age.render().is_empty());
        assert!(gender.render().is_empty());
    }

    #[test]
    fn gender_bars_in_bucket_order() {
        let (_, gender, selection) = views();
        selection.set_active(49);
        let facets = gender.render();
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].state_name, "Utah");
        let bars = &facets[0].bars;
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "Male");
        assert_eq!(bars[0].text, "20.3%");
        assert_eq!(bars[1].label, "Female");
        assert_eq!(bars[1].text, "24.6%");
    }

    #[test]
    fn views_use_independent_color_scales() {
        let (age, gender, _) = views();
        let age_panel = age.panel();
        let gender_panel = gender.panel();
        assert_eq!(age_panel.color_scale.len(), 3);
        assert_eq!(gender_panel.color_scale.len(), 2);
        assert_eq!(age_panel.color_scale[0].1, "#bbdfdf");
        assert_eq!(gender_panel.color_scale[0].1, "#543005");
    }

    #[test]
    fn bars_are_colored_by_bucket() {
        let (age, _, selection) = views();
        selection.set_active(39);
        let facets = age.render();
        let colors: Vec<&str> = facets[0].bars.iter().map(|b| b.color.as_str()).collect();
        assert_eq!(colors[0], "#bbdfdf");
        assert_eq!(colors[2], "#2a5b62");
    }

    #[test]
    fn panel_has_fixed_unit_domain() {
        let (_, gender, _) = views();
        let panel = gender.panel();
        assert_eq!(panel.x_domain, (0.0, 1.0));
        assert_eq!(panel.facet_height, Some(60));
        assert_eq!(panel.title, "Percentage by Gender with Any Disability");
    }

    #[test]
    fn panel_axis_follows_domain_and_format() {
        let (age, _, _) = views();
        let panel = age.panel();
        let labels: Vec<String> = panel.ticks(4).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["0%", "25%", "50%", "75%", "100%"]);
        assert_eq!(panel.position(0.401), 0.401);
        assert_eq!(panel.position(-0.1), 0.0);
        assert_eq!(panel.position(1.5), 1.0);
    }
}
