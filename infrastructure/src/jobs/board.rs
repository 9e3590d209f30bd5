//! reqwest-backed job board client

use super::extract::{detail_text, extract_postings};
use crate::config::FileJobsConfig;
use crate::http::build_client;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use taxa_application::{JobBoard, JobBoardError};
use taxa_domain::JobPosting;
use tracing::debug;

/// Errors building a [`RwfmJobBoard`]
#[derive(thiserror::Error, Debug)]
pub enum JobBoardSetupError {
    #[error("Invalid search URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Job board adapter for the natural resources job board search pages.
pub struct RwfmJobBoard {
    client: Client,
    search_url: Url,
    /// Site root that relative posting links are resolved against
    root: Url,
    page_timeout: Option<Duration>,
    detail_timeout: Option<Duration>,
}

impl RwfmJobBoard {
    pub fn new(client: Client, search_url: &str) -> Result<Self, JobBoardSetupError> {
        let invalid = |reason: String| JobBoardSetupError::InvalidUrl {
            url: search_url.to_string(),
            reason,
        };
        let search_url = Url::parse(search_url).map_err(|e| invalid(e.to_string()))?;
        let root = search_url.join("/").map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            client,
            search_url,
            root,
            page_timeout: None,
            detail_timeout: None,
        })
    }

    /// Per-request timeouts for listing pages and detail pages.
    ///
    /// Both override the client's own timeout.
    pub fn with_timeouts(mut self, page: Duration, detail: Duration) -> Self {
        self.page_timeout = Some(page);
        self.detail_timeout = Some(detail);
        self
    }

    /// Build a board from the `[jobs]` config section.
    pub fn from_config(config: &FileJobsConfig) -> Result<Self, JobBoardSetupError> {
        let page = Duration::from_secs(config.page_timeout_seconds);
        let detail = Duration::from_secs(config.detail_timeout_seconds);
        let client = build_client(&config.user_agent, page.max(detail))?;
        Ok(Self::new(client, &config.search_url)?.with_timeouts(page, detail))
    }

    async fn get_text(
        &self,
        request: reqwest::RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<String, JobBoardError> {
        let request = match timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| JobBoardError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobBoardError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| JobBoardError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl JobBoard for RwfmJobBoard {
    async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<JobPosting>, JobBoardError> {
        debug!("GET {} PageNum={} PageSize={}", self.search_url, page, page_size);
        let request = self
            .client
            .get(self.search_url.clone())
            .query(&[("PageSize", page_size), ("PageNum", page)]);
        let html = self.get_text(request, self.page_timeout).await?;
        Ok(extract_postings(&html, &self.root))
    }

    async fn fetch_detail(&self, link: &str) -> Result<String, JobBoardError> {
        debug!("GET {}", link);
        let html = self
            .get_text(self.client.get(link), self.detail_timeout)
            .await?;
        Ok(detail_text(&html))
    }
}
