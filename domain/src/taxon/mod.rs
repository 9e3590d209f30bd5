//! Taxon records produced by a successful lookup.

pub mod count;
pub mod record;

pub use count::format_count;
pub use record::{DEFAULT_OBSERVATIONS_BASE, PLACEHOLDER, TaxonRecord, observations_url};
