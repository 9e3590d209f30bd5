//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BatchParams`]: pacing of the sequential lookup runner
//! - [`JobsParams`]: pagination and pacing of the job-board export

pub mod batch_params;
pub mod jobs_params;

pub use batch_params::{BatchParams, DEFAULT_PACING};
pub use jobs_params::JobsParams;
