//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod job_board;
pub mod progress;
pub mod taxon_lookup;
