//! JSON output

use super::formatter::RowRenderer;
use taxa_domain::ResultRow;

/// Renders rows as a pretty-printed JSON array
pub struct JsonRenderer;

impl RowRenderer for JsonRenderer {
    fn render(&self, rows: &[ResultRow]) -> String {
        serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
    }
}
