//! Domain layer for taxa-check
//!
//! This crate contains the core entities and value objects. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Query batch**: the ordered species names of one run, never empty
//! - **Lookup outcome**: exactly one of found / not found / failed per item
//! - **Result row**: the renderer-facing record of an outcome
//! - **Job posting**: one listing scraped from the job board

pub mod config;
pub mod core;
pub mod jobs;
pub mod lookup;
pub mod taxon;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    query::{QueryBatch, QueryItem},
};
pub use jobs::JobPosting;
pub use lookup::{
    LookupOutcome, NoticeKind, NoticeRow, OBSERVATIONS_LINK_LABEL, ResultRow, TaxonRow,
};
pub use taxon::{DEFAULT_OBSERVATIONS_BASE, PLACEHOLDER, TaxonRecord, format_count, observations_url};
