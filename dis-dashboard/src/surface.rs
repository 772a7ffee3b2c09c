//! The seam between the dashboard and whatever draws it.

use crate::faceted_bar::{BarViewKind, Facet};
use crate::geo_view::ShapeStyle;

/// Receives the output of every selection change, synchronously.
///
/// `restyle_geo` updates existing map shapes in place; the map geometry itself
/// is drawn once from [`MapPanel`](crate::MapPanel). `render_facets` replaces
/// the whole facet set of one bar view.
pub trait RenderSurface {
    fn restyle_geo(&self, styles: &[ShapeStyle]);

    fn render_facets(&self, view: BarViewKind, facets: &[Facet]);
}
