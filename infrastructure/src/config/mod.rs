//! Configuration file loading for taxa-check
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./taxa.toml` or `./.taxa.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/taxa-check/config.toml`
//! 4. Fallback: `~/.config/taxa-check/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_BASE, DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT,
    FileBatchConfig, FileConfig, FileInaturalistConfig, FileJobsConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
