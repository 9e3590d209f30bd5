//! Lookup outcomes and the rows they render to.
//!
//! - [`outcome::LookupOutcome`] - found / not found / failed, one per query item
//! - [`row::ResultRow`] - renderer-facing row records

pub mod outcome;
pub mod row;

pub use outcome::LookupOutcome;
pub use row::{NoticeKind, NoticeRow, OBSERVATIONS_LINK_LABEL, ResultRow, TaxonRow};
