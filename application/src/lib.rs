//! Application layer for taxa-check
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BatchParams, DEFAULT_PACING, JobsParams};
pub use ports::{
    job_board::{JobBoard, JobBoardError},
    progress::{BatchProgressNotifier, JobsProgressNotifier, NoBatchProgress, NoJobsProgress},
    taxon_lookup::{LookupError, TaxonLookup},
};
pub use use_cases::export_jobs::{ExportJobsOutput, ExportJobsUseCase, StopReason};
pub use use_cases::run_batch::{BatchReport, RunBatchInput, RunBatchUseCase};
