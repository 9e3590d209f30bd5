//! Progress reporting for batch lookups and job exports

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use taxa_application::{BatchProgressNotifier, JobsProgressNotifier};
use taxa_domain::{LookupOutcome, QueryItem};

/// Reports batch progress with a progress bar on stderr
///
/// Used when results are rendered only at the end (json / html), so the
/// user still sees each lookup go by.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(Self::bar_style());
        bar.set_prefix("Checking");
        Self { bar }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn status_mark(outcome: &LookupOutcome) -> String {
        match outcome {
            LookupOutcome::Found { .. } => "v".green().to_string(),
            LookupOutcome::NotFound { .. } => "?".yellow().to_string(),
            LookupOutcome::Failed { .. } => "x".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message("Starting...");
    }

    fn on_item_start(&self, _index: usize, item: &QueryItem) {
        self.bar.set_message(item.term().to_string());
    }

    fn on_item_complete(&self, _index: usize, outcome: &LookupOutcome) {
        self.bar.set_message(format!(
            "{} {}",
            Self::status_mark(outcome),
            outcome.entered_term()
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self) {
        self.bar.finish_and_clear();
    }
}

/// Reports job export progress with a spinner and one line per page
pub struct JobsProgressReporter {
    spinner: ProgressBar,
}

impl JobsProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {prefix:.bold} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_prefix("Jobs");
        Self { spinner }
    }
}

impl Default for JobsProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JobsProgressNotifier for JobsProgressReporter {
    fn on_page_start(&self, page: u32, page_size: u32) {
        self.spinner.set_message(format!(
            "Fetching page {} (PageSize={})...",
            page, page_size
        ));
        self.spinner.tick();
    }

    fn on_page_complete(&self, page: u32, found: usize, new: usize, total: usize) {
        self.spinner.println(format!(
            "  {} page {}: {} jobs, {} new (total {})",
            "v".green(),
            page,
            found,
            new,
            total
        ));
    }

    fn on_export_stop(&self, reason: &str) {
        self.spinner
            .finish_with_message(format!("{} {}", "Stopped:".cyan(), reason));
    }
}
