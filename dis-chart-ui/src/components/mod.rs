//! Reusable Dioxus RSX components for the disability dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod faceted_bar_chart;
mod loading_spinner;
mod selection_banner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use faceted_bar_chart::FacetedBarChart;
pub use loading_spinner::LoadingSpinner;
pub use selection_banner::SelectionBanner;
