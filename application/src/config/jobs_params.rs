//! Jobs parameters: job-board pagination and pacing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for [`ExportJobsUseCase`](crate::use_cases::export_jobs::ExportJobsUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsParams {
    /// Postings requested per page (`PageSize`).
    pub page_size: u32,
    /// Stop after this many pages; `None` means no limit.
    pub max_pages: Option<u32>,
    /// Pause between page requests.
    pub page_delay: Duration,
    /// Fetch each posting's detail page for the full description.
    pub fetch_details: bool,
    /// Pause after each detail request.
    pub detail_delay: Duration,
}

impl Default for JobsParams {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: None,
            page_delay: Duration::from_millis(600),
            fetch_details: true,
            detail_delay: Duration::from_millis(200),
        }
    }
}

impl JobsParams {
    // ==================== Builder Methods ====================

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Limit the number of pages; `0` means unlimited.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = (max_pages > 0).then_some(max_pages);
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_fetch_details(mut self, fetch_details: bool) -> Self {
        self.fetch_details = fetch_details;
        self
    }

    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }
}
