//! Core domain concepts shared across all subdomains.
//!
//! - [`query::QueryItem`]: one trimmed, non-empty species name
//! - [`query::QueryBatch`]: the ordered items of one batch run
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod query;
