//! Batch parameters for the lookup runner.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default and minimum pause between consecutive lookups.
pub const DEFAULT_PACING: Duration = Duration::from_millis(300);

/// Parameters for [`RunBatchUseCase`](crate::use_cases::run_batch::RunBatchUseCase).
///
/// The pacing delay is a rate limit owed to the external API: the runner
/// waits this long after each lookup completes before starting the next one.
/// Intervals longer than [`DEFAULT_PACING`] are allowed, shorter ones are
/// raised to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Pause after each completed lookup (skipped after the last item).
    pub pacing: Duration,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            pacing: DEFAULT_PACING,
        }
    }
}

impl BatchParams {
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing.max(DEFAULT_PACING);
        self
    }

    /// Creates params from a pacing interval in milliseconds.
    pub fn from_pacing_millis(millis: u64) -> Self {
        Self::default().with_pacing(Duration::from_millis(millis))
    }
}
