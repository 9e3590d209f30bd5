//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_jobs;
pub mod run_batch;
