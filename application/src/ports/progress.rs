//! Progress notification ports
//!
//! Defines the interfaces for reporting progress during a batch lookup run
//! and during a job-board export.

use taxa_domain::{LookupOutcome, QueryItem};

/// Callback for progress updates during a batch lookup run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (live table, progress bar, etc.).
/// `on_item_complete` is called exactly once per item, in input order.
pub trait BatchProgressNotifier: Send + Sync {
    /// Called once before the first lookup
    fn on_batch_start(&self, total: usize);

    /// Called when the lookup for `index` is about to be issued
    fn on_item_start(&self, _index: usize, _item: &QueryItem) {}

    /// Called when the lookup for `index` has resolved to an outcome
    fn on_item_complete(&self, index: usize, outcome: &LookupOutcome);

    /// Called once after the last item
    fn on_batch_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoBatchProgress;

impl BatchProgressNotifier for NoBatchProgress {
    fn on_batch_start(&self, _total: usize) {}
    fn on_item_complete(&self, _index: usize, _outcome: &LookupOutcome) {}
}

/// Callback for progress updates during a job-board export
pub trait JobsProgressNotifier: Send + Sync {
    /// Called before a listing page is requested
    fn on_page_start(&self, page: u32, page_size: u32);

    /// Called after a page has been processed
    fn on_page_complete(&self, page: u32, found: usize, new: usize, total: usize);

    /// Called when the export stops paginating
    fn on_export_stop(&self, _reason: &str) {}
}

/// No-op jobs progress notifier
pub struct NoJobsProgress;

impl JobsProgressNotifier for NoJobsProgress {
    fn on_page_start(&self, _page: u32, _page_size: u32) {}
    fn on_page_complete(&self, _page: u32, _found: usize, _new: usize, _total: usize) {}
}
