//! iNaturalist taxa autocomplete adapter
//!
//! Implements [`TaxonLookup`](taxa_application::TaxonLookup) against
//! `GET {api_base}/taxa/autocomplete`.

mod client;
mod mapping;

pub use client::INaturalistClient;
pub use mapping::map_first_result;
