//! Result rows - the renderer-facing shape of a lookup outcome.
//!
//! [`ResultRow::from_outcome`] is a pure mapping. Renderers in the
//! presentation layer consume rows and never touch the lookup runner.

use super::outcome::LookupOutcome;
use serde::{Deserialize, Serialize};

/// Label used for the observations link cell.
pub const OBSERVATIONS_LINK_LABEL: &str = "View Observations";

/// One populated results row (eight columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonRow {
    pub observations_url: String,
    pub scientific_name: String,
    pub common_name: String,
    pub observations_count: String,
    pub taxon_id: String,
    pub taxon_changes_count: String,
    pub matched_term: String,
    pub entered_term: String,
}

impl TaxonRow {
    /// Cell values in column order.
    pub fn cells(&self) -> [&str; ResultRow::COLUMN_COUNT] {
        [
            &self.observations_url,
            &self.scientific_name,
            &self.common_name,
            &self.observations_count,
            &self.taxon_id,
            &self.taxon_changes_count,
            &self.matched_term,
            &self.entered_term,
        ]
    }
}

/// Kind of a full-width notice row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    NotFound,
    Error,
}

/// A row spanning every column, reporting not-found or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRow {
    pub kind: NoticeKind,
    pub entered_term: String,
}

impl NoticeRow {
    pub fn message(&self) -> String {
        match self.kind {
            NoticeKind::NotFound => format!("Species not found: {}", self.entered_term),
            NoticeKind::Error => format!("Error checking species: {}", self.entered_term),
        }
    }
}

/// A rendered results row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum ResultRow {
    Taxon(TaxonRow),
    Notice(NoticeRow),
}

impl ResultRow {
    pub const COLUMN_COUNT: usize = 8;

    /// Column headers, in order.
    pub const COLUMNS: [&'static str; Self::COLUMN_COUNT] = [
        "Observations",
        "Scientific Name",
        "Common Name",
        "Observation Count",
        "Taxon ID",
        "Taxon Changes",
        "Matched Term",
        "Entered Term",
    ];

    /// Map an outcome to its row.
    pub fn from_outcome(outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found { record } => Self::Taxon(TaxonRow {
                observations_url: record.observations_url.clone(),
                scientific_name: record.scientific_name.clone(),
                common_name: record.common_name.clone(),
                observations_count: record.observations_count.clone(),
                taxon_id: record.taxon_id.to_string(),
                taxon_changes_count: record.taxon_changes_count.clone(),
                matched_term: record.matched_term.clone(),
                entered_term: record.entered_term.clone(),
            }),
            LookupOutcome::NotFound { entered } => Self::Notice(NoticeRow {
                kind: NoticeKind::NotFound,
                entered_term: entered.clone(),
            }),
            LookupOutcome::Failed { entered, .. } => Self::Notice(NoticeRow {
                kind: NoticeKind::Error,
                entered_term: entered.clone(),
            }),
        }
    }

    /// Map a whole batch, preserving order.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a LookupOutcome>) -> Vec<Self> {
        outcomes.into_iter().map(Self::from_outcome).collect()
    }
}
