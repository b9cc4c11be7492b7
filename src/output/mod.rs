//! Output renderers for CLI results: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::catalog::Catalog;
use crate::models::RecommendationResponse;

/// Trait for rendering engine results to an output format.
pub trait OutputRenderer {
    /// Render a ranked recommendation response.
    fn render_recommendations(&self, response: &RecommendationResponse) -> String;

    /// Render the full agent catalog.
    fn render_catalog(&self, catalog: &Catalog) -> String;
}
