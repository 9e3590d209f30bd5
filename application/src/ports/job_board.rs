//! Job board port
//!
//! Defines the interface for reading listing pages and posting details
//! from a job board.

use async_trait::async_trait;
use taxa_domain::JobPosting;
use thiserror::Error;

/// Errors that can occur while reading the job board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobBoardError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP error: {status}")]
    Status { status: u16 },
}

/// Read access to a paginated job board
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Fetch one listing page (1-based) and extract its postings.
    async fn fetch_page(&self, page: u32, page_size: u32)
    -> Result<Vec<JobPosting>, JobBoardError>;

    /// Fetch a posting's detail page and return its main text.
    async fn fetch_detail(&self, link: &str) -> Result<String, JobBoardError>;
}
