//! Linked-selection view models for the state disability dashboard.
//!
//! One [`SelectionState`] drives every view. Hovering a state on the map sets
//! the active key; the map restyles and both faceted bar charts re-derive
//! their rows from it, all synchronously inside the hover handler.
//!
//! # Architecture
//!
//! - [`selection`]: the observable active-key cell
//! - [`geo_view`]: choropleth shapes, emphasis and tooltips
//! - [`faceted_bar`]: age and gender bar facets for the active state
//! - [`compositor`]: [`Dashboard`], which owns the views and wires them to a
//!   [`RenderSurface`]
//! - [`color`], [`format`]: scales and number formatting shared by the views
//! - [`config`]: [`DashboardConfig`]
//!
//! Everything here is single-threaded (`Rc`, `RefCell`), matching the WASM
//! front end that hosts it.
//!
//! # Usage
//!
//! ```rust
//! use dis_core::DataTable;
//! use dis_dashboard::{Dashboard, DashboardConfig};
//!
//! let csv = "state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female\n\
//!            Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n";
//! let table = DataTable::from_csv_str(csv).unwrap();
//! let dashboard = Dashboard::new(table, DashboardConfig::default());
//!
//! dashboard.hover(39);
//! assert_eq!(dashboard.age().render()[0].state_name, "Ohio");
//! dashboard.leave();
//! assert!(dashboard.age().render().is_empty());
//! ```

pub mod color;
pub mod compositor;
pub mod config;
pub mod faceted_bar;
pub mod format;
pub mod geo_view;
pub mod selection;
pub mod surface;

pub use compositor::{Dashboard, DashboardView};
pub use config::{BarConfig, DashboardConfig, MapConfig};
pub use faceted_bar::{
    AgeView, AxisTick, Bar, BarPanel, BarViewKind, Facet, FacetedBarView, GenderView,
};
pub use geo_view::{emphasis, Emphasis, GeoShape, GeoView, MapPanel, NoDataStyle, ShapeStyle};
pub use selection::{SelectionState, SubscriptionId};
pub use surface::RenderSurface;
