pub mod live_table;
pub mod reporter;

pub use live_table::LiveTable;
pub use reporter::{JobsProgressReporter, ProgressReporter};
