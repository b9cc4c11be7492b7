//! JSON output renderer.
//!
//! Emits the same bodies the HTTP API returns, pretty-printed.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::RecommendationResponse;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_recommendations(&self, response: &RecommendationResponse) -> String {
        pretty(response)
    }

    fn render_catalog(&self, catalog: &Catalog) -> String {
        pretty(catalog)
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}
