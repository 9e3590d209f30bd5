//! Run Batch use case
//!
//! Resolves every query item of a batch against the taxon lookup port, one
//! request at a time, in input order, pausing between requests.

use crate::config::{BatchParams, DEFAULT_PACING};
use crate::ports::progress::{BatchProgressNotifier, NoBatchProgress};
use crate::ports::taxon_lookup::TaxonLookup;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use taxa_domain::{DomainError, LookupOutcome, QueryBatch, QueryItem, ResultRow};
use tracing::{debug, info, warn};

/// Input for the RunBatch use case
#[derive(Debug, Clone)]
pub struct RunBatchInput {
    pub batch: QueryBatch,
}

impl RunBatchInput {
    pub fn new(batch: QueryBatch) -> Self {
        Self { batch }
    }

    /// Parse raw multi-line text into an input.
    ///
    /// Fails with [`DomainError::EmptyInput`] when no species name is left
    /// after trimming; the caller should prompt the user and issue no
    /// requests.
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        QueryBatch::parse(raw).map(Self::new)
    }
}

/// Result of one batch run, outcomes in input order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<LookupOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_found()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_not_found()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Rows for rendering, one per outcome, same order.
    pub fn rows(&self) -> Vec<ResultRow> {
        ResultRow::from_outcomes(&self.outcomes)
    }
}

/// Use case for running a sequential batch lookup
pub struct RunBatchUseCase<L: TaxonLookup + 'static> {
    lookup: Arc<L>,
    params: BatchParams,
}

impl<L: TaxonLookup + 'static> RunBatchUseCase<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            params: BatchParams::default(),
        }
    }

    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunBatchInput) -> BatchReport {
        self.execute_with_progress(input, &NoBatchProgress).await
    }

    /// Parse raw multi-line text and run it as one batch
    ///
    /// Input that holds no species name is rejected with
    /// [`DomainError::EmptyInput`] before the lookup port is touched.
    pub async fn execute_raw(
        &self,
        raw: &str,
        progress: &dyn BatchProgressNotifier,
    ) -> Result<BatchReport, DomainError> {
        let input = RunBatchInput::from_raw(raw)?;
        Ok(self.execute_with_progress(input, progress).await)
    }

    /// Execute the use case with progress callbacks
    ///
    /// Never fails: every per-item failure becomes a
    /// [`LookupOutcome::Failed`] and the loop moves on.
    pub async fn execute_with_progress(
        &self,
        input: RunBatchInput,
        progress: &dyn BatchProgressNotifier,
    ) -> BatchReport {
        let total = input.batch.len();
        let started_at = Utc::now();

        info!("Starting batch of {} lookups", total);
        progress.on_batch_start(total);

        let mut outcomes = Vec::with_capacity(total);
        for (index, item) in input.batch.iter().enumerate() {
            // One request in flight at a time, paced after each completion.
            if index > 0 {
                tokio::time::sleep(self.params.pacing.max(DEFAULT_PACING)).await;
            }

            progress.on_item_start(index, item);
            let outcome = self.resolve(item).await;
            progress.on_item_complete(index, &outcome);
            outcomes.push(outcome);
        }

        let report = BatchReport {
            outcomes,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "Batch complete: {} found, {} not found, {} failed",
            report.found_count(),
            report.not_found_count(),
            report.failed_count()
        );
        progress.on_batch_complete();

        report
    }

    /// Resolve a single item to exactly one outcome
    async fn resolve(&self, item: &QueryItem) -> LookupOutcome {
        debug!("Looking up '{}'", item);
        match self.lookup.lookup(item).await {
            Ok(Some(record)) => {
                debug!("'{}' matched taxon {}", item, record.taxon_id);
                LookupOutcome::found(record)
            }
            Ok(None) => {
                debug!("'{}' has no match", item);
                LookupOutcome::not_found(item.term())
            }
            Err(e) => {
                warn!("Error fetching data for species '{}': {}", item, e);
                LookupOutcome::failed(item.term(), e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::taxon_lookup::LookupError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use taxa_domain::{NoticeKind, NoticeRow, TaxonRecord};
    use tokio::time::Instant;

    // -- Mock TaxonLookup ------------------------------------------------------

    #[derive(Clone)]
    enum Reply {
        Match(u64),
        Empty,
        Fail(LookupError),
    }

    struct Call {
        term: String,
        started: Instant,
        finished: Instant,
    }

    #[derive(Default)]
    struct ScriptedLookup {
        replies: HashMap<String, (Duration, Reply)>,
        calls: Mutex<Vec<Call>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedLookup {
        fn new() -> Self {
            Self::default()
        }

        fn reply(mut self, term: &str, latency_ms: u64, reply: Reply) -> Self {
            self.replies
                .insert(term.to_string(), (Duration::from_millis(latency_ms), reply));
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn called_terms(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|c| c.term.clone())
                .collect()
        }
    }

    #[async_trait]
    impl TaxonLookup for ScriptedLookup {
        async fn lookup(&self, item: &QueryItem) -> Result<Option<TaxonRecord>, LookupError> {
            let started = Instant::now();
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let (latency, reply) = self
                .replies
                .get(item.term())
                .cloned()
                .unwrap_or((Duration::ZERO, Reply::Empty));
            tokio::time::sleep(latency).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.calls.lock().unwrap().push(Call {
                term: item.term().to_string(),
                started,
                finished: Instant::now(),
            });

            match reply {
                Reply::Match(id) => Ok(Some(
                    TaxonRecord::new(id, item.term()).with_scientific_name(Some(item.term())),
                )),
                Reply::Empty => Ok(None),
                Reply::Fail(e) => Err(e),
            }
        }
    }

    // -- Recording notifier ----------------------------------------------------

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl BatchProgressNotifier for RecordingProgress {
        fn on_batch_start(&self, total: usize) {
            self.events.lock().unwrap().push(format!("start:{}", total));
        }

        fn on_item_start(&self, index: usize, item: &QueryItem) {
            self.events
                .lock()
                .unwrap()
                .push(format!("item:{}:{}", index, item));
        }

        fn on_item_complete(&self, index: usize, outcome: &LookupOutcome) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", index, outcome.as_str()));
        }

        fn on_batch_complete(&self) {
            self.events.lock().unwrap().push("complete".to_string());
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn input(lines: &[&str]) -> RunBatchInput {
        RunBatchInput::from_raw(&lines.join("\n")).unwrap()
    }

    fn use_case(lookup: ScriptedLookup) -> (Arc<ScriptedLookup>, RunBatchUseCase<ScriptedLookup>) {
        let lookup = Arc::new(lookup);
        let use_case = RunBatchUseCase::new(Arc::clone(&lookup));
        (lookup, use_case)
    }

    // -- Tests -----------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn match_then_not_found_yields_two_rows_in_order() {
        let (_, uc) = use_case(
            ScriptedLookup::new()
                .reply("Homo sapiens sapiens", 20, Reply::Match(43584))
                .reply("Not A Real Species", 20, Reply::Empty),
        );

        let report = uc
            .execute(input(&["Homo sapiens sapiens", "Not A Real Species"]))
            .await;
        let rows = report.rows();

        assert_eq!(rows.len(), 2);
        let ResultRow::Taxon(first) = &rows[0] else {
            panic!("expected populated row first");
        };
        assert_eq!(first.taxon_id, "43584");
        assert_eq!(first.entered_term, "Homo sapiens sapiens");
        assert_eq!(
            rows[1],
            ResultRow::Notice(NoticeRow {
                kind: NoticeKind::NotFound,
                entered_term: "Not A Real Species".to_string(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn order_is_input_order_regardless_of_latency() {
        let (lookup, uc) = use_case(
            ScriptedLookup::new()
                .reply("slow", 900, Reply::Match(1))
                .reply("fast", 1, Reply::Match(2))
                .reply("medium", 250, Reply::Empty),
        );

        let report = uc.execute(input(&["slow", "fast", "medium"])).await;

        assert_eq!(report.len(), 3);
        let entered: Vec<&str> = report.outcomes.iter().map(|o| o.entered_term()).collect();
        assert_eq!(entered, vec!["slow", "fast", "medium"]);
        assert_eq!(lookup.called_terms(), vec!["slow", "fast", "medium"]);
    }

    #[tokio::test(start_paused = true)]
    async fn network_error_only_fails_that_item() {
        let (lookup, uc) = use_case(
            ScriptedLookup::new()
                .reply("Puma concolor", 5, Reply::Match(41944))
                .reply(
                    "Lynx rufus",
                    5,
                    Reply::Fail(LookupError::Transport("connection reset".to_string())),
                )
                .reply("Canis latrans", 5, Reply::Match(42051))
                .reply("Vulpes vulpes", 5, Reply::Fail(LookupError::Status { status: 500 })),
        );

        let report = uc
            .execute(input(&[
                "Puma concolor",
                "Lynx rufus",
                "Canis latrans",
                "Vulpes vulpes",
            ]))
            .await;

        assert_eq!(lookup.call_count(), 4);
        assert_eq!(report.found_count(), 2);
        assert_eq!(report.failed_count(), 2);
        assert!(report.outcomes[1].is_failed());
        assert!(report.outcomes[2].is_found());

        let rows = report.rows();
        let ResultRow::Notice(notice) = &rows[1] else {
            panic!("expected error notice");
        };
        assert_eq!(notice.message(), "Error checking species: Lynx rufus");
    }

    #[tokio::test(start_paused = true)]
    async fn waits_at_least_pacing_between_lookups() {
        let (lookup, uc) = use_case(
            ScriptedLookup::new()
                .reply("a", 40, Reply::Match(1))
                .reply("b", 0, Reply::Fail(LookupError::Malformed("x".to_string())))
                .reply("c", 120, Reply::Empty)
                .reply("d", 5, Reply::Match(4)),
        );

        uc.execute(input(&["a", "b", "c", "d"])).await;

        let calls = lookup.calls.lock().unwrap();
        assert_eq!(calls.len(), 4);
        for pair in calls.windows(2) {
            let gap = pair[1].started.duration_since(pair[0].finished);
            assert!(gap >= Duration::from_millis(300), "gap was {:?}", gap);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn custom_pacing_is_honored_and_not_applied_after_last() {
        let (_, uc) = use_case(ScriptedLookup::new());
        let uc = uc.with_params(BatchParams::from_pacing_millis(1_000));

        let start = Instant::now();
        uc.execute(input(&["a", "b", "c"])).await;

        // Two gaps for three items, zero-latency lookups
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(2_100), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn never_more_than_one_lookup_in_flight() {
        let (lookup, uc) = use_case(
            ScriptedLookup::new()
                .reply("a", 500, Reply::Match(1))
                .reply("b", 500, Reply::Match(2))
                .reply("c", 500, Reply::Match(3)),
        );

        uc.execute(input(&["a", "b", "c"])).await;

        assert_eq!(lookup.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicates_are_looked_up_independently() {
        let (lookup, uc) = use_case(ScriptedLookup::new().reply("Puma concolor", 1, Reply::Match(41944)));

        let report = uc
            .execute(input(&["Puma concolor", "Puma concolor"]))
            .await;

        assert_eq!(lookup.call_count(), 2);
        assert_eq!(report.found_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_sees_each_item_once_in_order() {
        let (_, uc) = use_case(
            ScriptedLookup::new()
                .reply("a", 30, Reply::Match(1))
                .reply("b", 10, Reply::Empty),
        );
        let progress = RecordingProgress::default();

        uc.execute_with_progress(input(&["a", "b"]), &progress).await;

        let events = progress.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "start:2",
                "item:0:a",
                "done:0:found",
                "item:1:b",
                "done:1:not_found",
                "complete",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn pacing_below_minimum_still_waits_300ms() {
        for millis in [0, 100] {
            let (lookup, uc) = use_case(ScriptedLookup::new());
            let uc = uc.with_params(BatchParams::from_pacing_millis(millis));

            uc.execute(input(&["a", "b", "c"])).await;

            let calls = lookup.calls.lock().unwrap();
            assert_eq!(calls.len(), 3);
            for pair in calls.windows(2) {
                let gap = pair[1].started.duration_since(pair[0].finished);
                assert!(
                    gap >= Duration::from_millis(300),
                    "pacing_ms={} gave gap {:?}",
                    millis,
                    gap
                );
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hand_built_zero_pacing_is_not_honored() {
        let (lookup, uc) = use_case(ScriptedLookup::new());
        let uc = uc.with_params(BatchParams {
            pacing: Duration::ZERO,
        });

        uc.execute(input(&["a", "b"])).await;

        let calls = lookup.calls.lock().unwrap();
        let gap = calls[1].started.duration_since(calls[0].finished);
        assert!(gap >= Duration::from_millis(300), "gap was {:?}", gap);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_is_rejected_before_any_request() {
        let (lookup, uc) = use_case(ScriptedLookup::new().reply("a", 1, Reply::Match(1)));
        let progress = RecordingProgress::default();

        let err = uc
            .execute_raw("   \n\n  \t ", &progress)
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::EmptyInput);
        assert_eq!(err.to_string(), "Please enter at least one species name.");
        assert_eq!(lookup.call_count(), 0);
        assert!(progress.events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn raw_text_is_trimmed_and_run_in_order() {
        let (lookup, uc) = use_case(ScriptedLookup::new());

        let report = uc
            .execute_raw("  Puma concolor \n\n Lynx rufus\n", &NoBatchProgress)
            .await
            .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(lookup.called_terms(), vec!["Puma concolor", "Lynx rufus"]);
    }
}
