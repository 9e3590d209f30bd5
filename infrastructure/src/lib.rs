//! Infrastructure layer for taxa-check
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod inaturalist;
#[cfg(feature = "jobs")]
pub mod jobs;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBatchConfig, FileConfig, FileInaturalistConfig,
    FileJobsConfig, FileOutputConfig, FileOutputFormat,
};
pub use inaturalist::INaturalistClient;
#[cfg(feature = "jobs")]
pub use jobs::{ExportError, JobBoardSetupError, RwfmJobBoard, write_jobs_xml};
