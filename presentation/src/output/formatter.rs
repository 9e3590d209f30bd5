//! Row renderer trait

use super::{ConsoleRenderer, HtmlRenderer, JsonRenderer};
use taxa_domain::{OutputFormat, ResultRow};

/// Trait for rendering result rows
///
/// Renderers only see rows; they never touch the lookup runner.
pub trait RowRenderer {
    /// Render a complete batch, rows in the given order
    fn render(&self, rows: &[ResultRow]) -> String;
}

/// Pick the renderer for an output format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn RowRenderer> {
    match format {
        OutputFormat::Table => Box::new(ConsoleRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
    }
}
