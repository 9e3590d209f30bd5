//! Row renderers for lookup results

pub mod console;
pub mod formatter;
pub mod html;
pub mod json;

pub use console::ConsoleRenderer;
pub use formatter::{RowRenderer, renderer_for};
pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// Force colored output off (or back to terminal detection).
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
