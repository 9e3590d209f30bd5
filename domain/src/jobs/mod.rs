//! Job-board postings.

mod posting;

pub use posting::JobPosting;
