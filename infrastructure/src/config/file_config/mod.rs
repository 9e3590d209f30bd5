//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod batch;
mod inaturalist;
mod jobs;
mod output;

pub use batch::{FileBatchConfig, MIN_PACING_MS};
pub use inaturalist::{DEFAULT_API_BASE, DEFAULT_USER_AGENT, FileInaturalistConfig};
pub use jobs::{DEFAULT_SEARCH_URL, FileJobsConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};
use taxa_domain::ConfigIssue;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.iter().map(|i| i.message.as_str()).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<ConfigIssue>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Taxonomy API settings
    pub inaturalist: FileInaturalistConfig,
    /// Lookup runner pacing
    pub batch: FileBatchConfig,
    /// Job-board export settings
    pub jobs: FileJobsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks for empty URLs and zero values where a positive number is
    /// required, and for a `batch.pacing_ms` below [`MIN_PACING_MS`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. URLs
        let urls = [
            ("inaturalist.api_base", &self.inaturalist.api_base),
            ("inaturalist.site_base", &self.inaturalist.site_base),
            ("jobs.search_url", &self.jobs.search_url),
        ];
        for (field, value) in urls {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::empty_url(field));
            }
        }

        // 2. Positive values
        if self.inaturalist.timeout_seconds == 0 {
            issues.push(ConfigIssue::zero_value("inaturalist.timeout_seconds"));
        }
        if self.jobs.page_size == 0 {
            issues.push(ConfigIssue::zero_value("jobs.page_size"));
        }
        if self.jobs.page_timeout_seconds == 0 {
            issues.push(ConfigIssue::zero_value("jobs.page_timeout_seconds"));
        }
        if self.jobs.detail_timeout_seconds == 0 {
            issues.push(ConfigIssue::zero_value("jobs.detail_timeout_seconds"));
        }

        // 3. Pacing floor
        if self.batch.pacing_ms < MIN_PACING_MS {
            issues.push(ConfigIssue::below_minimum("batch.pacing_ms", MIN_PACING_MS));
        }

        issues
    }

    /// Fail when [`validate`](Self::validate) reports any error-level issue.
    pub fn ensure_valid(&self) -> Result<(), ConfigValidationError> {
        let errors: Vec<ConfigIssue> = self.validate().into_iter().filter(|i| i.is_error()).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }
}
