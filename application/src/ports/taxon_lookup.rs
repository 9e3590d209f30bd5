//! Taxon lookup port
//!
//! Defines the interface for resolving one query item against a taxonomy
//! search service.

use async_trait::async_trait;
use taxa_domain::{QueryItem, TaxonRecord};
use thiserror::Error;

/// Errors that can occur during a single lookup.
///
/// A search with zero matches is not an error; it is `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Network failure, timeout, or connection refused
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("API request failed (status {status})")]
    Status { status: u16 },

    /// The body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Lookup service for taxa
///
/// This port defines how the application layer queries the taxonomy API.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TaxonLookup: Send + Sync {
    /// Resolve `item` to its first species-level match.
    ///
    /// Returns `Ok(None)` when the search succeeds with no results.
    async fn lookup(&self, item: &QueryItem) -> Result<Option<TaxonRecord>, LookupError>;
}
