//! Presentation settings for the dashboard.
//!
//! Defaults reproduce the published dashboard. A JSON document can override
//! any top-level section; map settings may also be overridden field by field.

use anyhow::Context;
use dis_core::DisabilityCategory;
use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;

/// US states topology (FIPS-keyed) from vega-datasets.
pub const US_10M_TOPOLOGY_URL: &str =
    "https://cdn.jsdelivr.net/npm/vega-datasets@v1.29.0/data/us-10m.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub map: MapConfig,
    pub age: BarConfig,
    pub gender: BarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub projection: String,
    pub topology_url: String,
    pub topology_object: String,
    /// Category whose percentage drives the fill color.
    pub color_category: DisabilityCategory,
    pub color_scheme: ColorScheme,
    pub legend_title: String,
    pub active_opacity: f64,
    pub inactive_opacity: f64,
    pub active_stroke: String,
    pub inactive_stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    pub title: String,
    pub width: u32,
    /// Height of each facet; `None` lets the renderer size it by bar count.
    pub facet_height: Option<u32>,
    pub color_scheme: ColorScheme,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "2020 Disability Status and Types among Adults 18 Years of Age or Older"
                .to_string(),
            width: 900,
            height: 500,
            projection: "albersUsa".to_string(),
            topology_url: US_10M_TOPOLOGY_URL.to_string(),
            topology_object: "states".to_string(),
            color_category: DisabilityCategory::Any,
            color_scheme: ColorScheme::Blues,
            legend_title: "Statewide Disability Estimate (%)".to_string(),
            active_opacity: 1.0,
            inactive_opacity: 0.2,
            active_stroke: "black".to_string(),
            inactive_stroke: "white".to_string(),
        }
    }
}

impl BarConfig {
    pub fn age() -> Self {
        Self {
            title: "Percentage by Age with Any Disability".to_string(),
            width: 300,
            facet_height: None,
            color_scheme: ColorScheme::Teals,
        }
    }

    pub fn gender() -> Self {
        Self {
            title: "Percentage by Gender with Any Disability".to_string(),
            width: 300,
            facet_height: Some(60),
            color_scheme: ColorScheme::BrownBlueGreen,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            age: BarConfig::age(),
            gender: BarConfig::gender(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid dashboard config JSON")
    }
}
