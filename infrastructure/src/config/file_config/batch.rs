//! Batch configuration from TOML (`[batch]` section)

use serde::{Deserialize, Serialize};
use taxa_application::{BatchParams, DEFAULT_PACING};

/// Smallest accepted `pacing_ms`
pub const MIN_PACING_MS: u64 = DEFAULT_PACING.as_millis() as u64;

/// Raw batch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Pause between consecutive lookups, in milliseconds (at least 300)
    pub pacing_ms: u64,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            pacing_ms: MIN_PACING_MS,
        }
    }
}

impl FileBatchConfig {
    pub fn to_params(&self) -> BatchParams {
        BatchParams::from_pacing_millis(self.pacing_ms)
    }
}
