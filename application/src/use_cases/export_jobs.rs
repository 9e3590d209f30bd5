//! Export Jobs use case
//!
//! Walks the job board page by page, collects unique postings and,
//! optionally, replaces each listing snippet with the posting's full
//! detail text.

use crate::config::JobsParams;
use crate::ports::job_board::JobBoard;
use crate::ports::progress::{JobsProgressNotifier, NoJobsProgress};
use std::collections::HashSet;
use std::sync::Arc;
use taxa_domain::JobPosting;
use tracing::{debug, info, warn};

/// Why pagination stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A page yielded no postings
    EmptyPage,
    /// A page yielded only postings already seen
    NoNewPostings,
    /// The configured page limit was reached
    MaxPages,
    /// A page request failed; postings collected so far are kept
    PageFailed(String),
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::EmptyPage => write!(f, "no more jobs found"),
            StopReason::NoNewPostings => write!(f, "no more new jobs found"),
            StopReason::MaxPages => write!(f, "reached page limit"),
            StopReason::PageFailed(e) => write!(f, "page request failed: {}", e),
        }
    }
}

/// Output of the ExportJobs use case
#[derive(Debug, Clone)]
pub struct ExportJobsOutput {
    /// Unique postings in the order they were first seen
    pub postings: Vec<JobPosting>,
    pub pages_fetched: u32,
    pub stop_reason: StopReason,
}

/// Use case for exporting all postings from a job board
pub struct ExportJobsUseCase<B: JobBoard + 'static> {
    board: Arc<B>,
    params: JobsParams,
}

impl<B: JobBoard + 'static> ExportJobsUseCase<B> {
    pub fn new(board: Arc<B>) -> Self {
        Self {
            board,
            params: JobsParams::default(),
        }
    }

    pub fn with_params(mut self, params: JobsParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> ExportJobsOutput {
        self.execute_with_progress(&NoJobsProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn JobsProgressNotifier,
    ) -> ExportJobsOutput {
        let page_size = self.params.page_size;
        let mut seen: HashSet<String> = HashSet::new();
        let mut postings: Vec<JobPosting> = Vec::new();
        let mut page: u32 = 1;
        let mut pages_fetched: u32 = 0;

        info!("Exporting jobs (page size {})", page_size);

        let stop_reason = loop {
            progress.on_page_start(page, page_size);

            let found = match self.board.fetch_page(page, page_size).await {
                Ok(found) => found,
                Err(e) => {
                    warn!("Error fetching page {}: {}", page, e);
                    break StopReason::PageFailed(e.to_string());
                }
            };
            pages_fetched += 1;

            let found_count = found.len();
            let mut new_count = 0;
            for posting in found {
                if !seen.insert(posting.link.clone()) {
                    continue;
                }
                let posting = if self.params.fetch_details {
                    self.with_detail(posting).await
                } else {
                    posting
                };
                postings.push(posting);
                new_count += 1;
            }

            info!(
                "Page {}: {} jobs, {} new (total {})",
                page,
                found_count,
                new_count,
                postings.len()
            );
            progress.on_page_complete(page, found_count, new_count, postings.len());

            if found_count == 0 {
                break StopReason::EmptyPage;
            }
            if new_count == 0 {
                break StopReason::NoNewPostings;
            }
            if let Some(max_pages) = self.params.max_pages
                && page >= max_pages
            {
                break StopReason::MaxPages;
            }

            page += 1;
            tokio::time::sleep(self.params.page_delay).await;
        };

        info!("Stopping export: {}", stop_reason);
        progress.on_export_stop(&stop_reason.to_string());

        ExportJobsOutput {
            postings,
            pages_fetched,
            stop_reason,
        }
    }

    /// Replace the listing snippet with the detail page text when available.
    async fn with_detail(&self, mut posting: JobPosting) -> JobPosting {
        match self.board.fetch_detail(&posting.link).await {
            Ok(text) if !text.trim().is_empty() => posting.description = text,
            Ok(_) => debug!("Empty detail page for {}", posting.link),
            Err(e) => debug!("Detail fetch failed for {}: {}", posting.link, e),
        }
        tokio::time::sleep(self.params.detail_delay).await;
        posting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::job_board::JobBoardError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    // -- Mock JobBoard ---------------------------------------------------------

    #[derive(Default)]
    struct MockBoard {
        pages: Vec<Result<Vec<JobPosting>, JobBoardError>>,
        details: HashMap<String, Result<String, JobBoardError>>,
        page_calls: Mutex<Vec<(u32, Instant)>>,
        detail_calls: Mutex<Vec<String>>,
    }

    impl MockBoard {
        fn with_pages(pages: Vec<Result<Vec<JobPosting>, JobBoardError>>) -> Self {
            Self {
                pages,
                ..Default::default()
            }
        }

        fn detail(mut self, link: &str, result: Result<String, JobBoardError>) -> Self {
            self.details.insert(link.to_string(), result);
            self
        }
    }

    #[async_trait]
    impl JobBoard for MockBoard {
        async fn fetch_page(
            &self,
            page: u32,
            _page_size: u32,
        ) -> Result<Vec<JobPosting>, JobBoardError> {
            self.page_calls.lock().unwrap().push((page, Instant::now()));
            self.pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_detail(&self, link: &str) -> Result<String, JobBoardError> {
            self.detail_calls.lock().unwrap().push(link.to_string());
            self.details
                .get(link)
                .cloned()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn job(n: u32) -> JobPosting {
        JobPosting::new(format!("https://jobs.example/view-job/?id={}", n))
            .with_id(n.to_string())
            .with_title(format!("Job {}", n))
            .with_description("snippet")
    }

    fn no_details() -> JobsParams {
        JobsParams::default().with_fetch_details(false)
    }

    fn export(board: MockBoard, params: JobsParams) -> (Arc<MockBoard>, ExportJobsUseCase<MockBoard>) {
        let board = Arc::new(board);
        let uc = ExportJobsUseCase::new(Arc::clone(&board)).with_params(params);
        (board, uc)
    }

    // -- Tests -----------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn stops_on_empty_page() {
        let (board, uc) = export(
            MockBoard::with_pages(vec![Ok(vec![job(1), job(2)]), Ok(vec![job(3)]), Ok(vec![])]),
            no_details(),
        );

        let output = uc.execute().await;

        assert_eq!(output.postings.len(), 3);
        assert_eq!(output.pages_fetched, 3);
        assert_eq!(output.stop_reason, StopReason::EmptyPage);
        assert!(board.detail_calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn duplicates_by_link_are_dropped_and_stop_pagination() {
        let (_, uc) = export(
            MockBoard::with_pages(vec![
                Ok(vec![job(1), job(2), job(1)]),
                Ok(vec![job(2), job(3)]),
                Ok(vec![job(3), job(1)]),
            ]),
            no_details(),
        );

        let output = uc.execute().await;

        let ids: Vec<&str> = output.postings.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(output.stop_reason, StopReason::NoNewPostings);
        assert_eq!(output.pages_fetched, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn max_pages_limits_requests() {
        let (board, uc) = export(
            MockBoard::with_pages(vec![Ok(vec![job(1)]), Ok(vec![job(2)]), Ok(vec![job(3)])]),
            no_details().with_max_pages(2),
        );

        let output = uc.execute().await;

        assert_eq!(output.postings.len(), 2);
        assert_eq!(output.stop_reason, StopReason::MaxPages);
        assert_eq!(board.page_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn page_failure_keeps_collected_postings() {
        let (_, uc) = export(
            MockBoard::with_pages(vec![
                Ok(vec![job(1)]),
                Err(JobBoardError::Status { status: 502 }),
            ]),
            no_details(),
        );

        let output = uc.execute().await;

        assert_eq!(output.postings.len(), 1);
        assert_eq!(output.pages_fetched, 1);
        assert!(matches!(output.stop_reason, StopReason::PageFailed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn detail_text_replaces_snippet_unless_empty_or_failed() {
        let board = MockBoard::with_pages(vec![Ok(vec![job(1), job(2), job(3)])])
            .detail(&job(1).link, Ok("Full description".to_string()))
            .detail(&job(2).link, Ok("   ".to_string()))
            .detail(
                &job(3).link,
                Err(JobBoardError::RequestFailed("timeout".to_string())),
            );
        let (board, uc) = export(board, JobsParams::default());

        let output = uc.execute().await;

        assert_eq!(output.postings[0].description, "Full description");
        assert_eq!(output.postings[1].description, "snippet");
        assert_eq!(output.postings[2].description, "snippet");
        assert_eq!(board.detail_calls.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_between_page_requests() {
        let (board, uc) = export(
            MockBoard::with_pages(vec![Ok(vec![job(1)]), Ok(vec![job(2)]), Ok(vec![])]),
            no_details().with_page_delay(Duration::from_millis(600)),
        );

        uc.execute().await;

        let calls = board.page_calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        for pair in calls.windows(2) {
            assert!(pair[1].1.duration_since(pair[0].1) >= Duration::from_millis(600));
        }
    }
}
