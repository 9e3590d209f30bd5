//! Query item and batch value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single species name to look up (Value Object)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueryItem {
    term: String,
}

impl QueryItem {
    /// Create a query item, trimming surrounding whitespace.
    ///
    /// Returns [`DomainError::InvalidQueryItem`] if nothing is left after trimming.
    pub fn new(term: impl Into<String>) -> Result<Self, DomainError> {
        let term = term.into();
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQueryItem(term));
        }
        Ok(Self {
            term: trimmed.to_string(),
        })
    }

    /// Get the term as entered (trimmed)
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Consume and return the inner term
    pub fn into_term(self) -> String {
        self.term
    }
}

impl std::fmt::Display for QueryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.term)
    }
}

impl TryFrom<String> for QueryItem {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        QueryItem::new(s)
    }
}

impl From<QueryItem> for String {
    fn from(item: QueryItem) -> Self {
        item.term
    }
}

/// An ordered, non-empty list of query items for one batch run.
///
/// Input order is preserved and duplicates are kept: each entry is looked up
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBatch {
    items: Vec<QueryItem>,
}

impl QueryBatch {
    /// Split raw multi-line input into query items.
    ///
    /// Lines are trimmed and blank lines dropped. Returns
    /// [`DomainError::EmptyInput`] when no line survives.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let items: Vec<QueryItem> = raw
            .lines()
            .filter_map(|line| QueryItem::new(line).ok())
            .collect();
        Self::from_items(items)
    }

    /// Build a batch from already-validated items.
    pub fn from_items(items: Vec<QueryItem>) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[QueryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryItem> {
        self.items.iter()
    }
}

impl IntoIterator for QueryBatch {
    type Item = QueryItem;
    type IntoIter = std::vec::IntoIter<QueryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
