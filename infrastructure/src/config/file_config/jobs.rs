//! Job export configuration from TOML (`[jobs]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use taxa_application::JobsParams;

pub const DEFAULT_SEARCH_URL: &str = "https://jobs.rwfm.tamu.edu/search/";

/// Raw job export configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJobsConfig {
    /// Listing page URL; `PageSize` and `PageNum` are appended
    pub search_url: String,
    /// Postings per page
    pub page_size: u32,
    /// Pause between page requests, in milliseconds
    pub page_delay_ms: u64,
    /// Pause after each detail request, in milliseconds
    pub detail_delay_ms: u64,
    /// Timeout for each listing page request, in seconds
    pub page_timeout_seconds: u64,
    /// Timeout for each detail page request, in seconds
    pub detail_timeout_seconds: u64,
    /// Page limit (0 = unlimited)
    pub max_pages: u32,
    /// Fetch each posting's detail page
    pub fetch_details: bool,
    /// Output XML path
    pub output: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FileJobsConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            page_size: 100,
            page_delay_ms: 600,
            detail_delay_ms: 200,
            page_timeout_seconds: 15,
            detail_timeout_seconds: 15,
            max_pages: 0,
            fetch_details: true,
            output: "jobs.xml".to_string(),
            user_agent: concat!("taxa-check/", env!("CARGO_PKG_VERSION"), " (job export)")
                .to_string(),
        }
    }
}

impl FileJobsConfig {
    pub fn to_params(&self) -> JobsParams {
        JobsParams::default()
            .with_page_size(self.page_size)
            .with_max_pages(self.max_pages)
            .with_page_delay(Duration::from_millis(self.page_delay_ms))
            .with_fetch_details(self.fetch_details)
            .with_detail_delay(Duration::from_millis(self.detail_delay_ms))
    }
}
