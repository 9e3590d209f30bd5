//! Per-item lookup outcome.

use crate::taxon::TaxonRecord;
use serde::{Deserialize, Serialize};

/// What happened to one query item (Value Object)
///
/// Every item of a batch ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The search returned a match
    Found { record: TaxonRecord },
    /// The search succeeded with zero results
    NotFound { entered: String },
    /// Transport failure, non-2xx status, or malformed payload
    Failed { entered: String, reason: String },
}

impl LookupOutcome {
    pub fn found(record: TaxonRecord) -> Self {
        Self::Found { record }
    }

    pub fn not_found(entered: impl Into<String>) -> Self {
        Self::NotFound {
            entered: entered.into(),
        }
    }

    pub fn failed(entered: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            entered: entered.into(),
            reason: reason.into(),
        }
    }

    /// The term the user entered for this item
    pub fn entered_term(&self) -> &str {
        match self {
            Self::Found { record } => &record.entered_term,
            Self::NotFound { entered } | Self::Failed { entered, .. } => entered,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Short status label for logs and progress output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found { .. } => "found",
            Self::NotFound { .. } => "not_found",
            Self::Failed { .. } => "failed",
        }
    }
}
