//! Presentation layer for taxa-check
//!
//! This crate contains CLI definitions, row renderers
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg, JobsArgs, LookupArgs};
pub use output::{
    ConsoleRenderer, HtmlRenderer, JsonRenderer, RowRenderer, renderer_for, set_color_enabled,
};
pub use progress::{JobsProgressReporter, LiveTable, ProgressReporter};
