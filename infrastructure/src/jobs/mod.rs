//! Job board scraping and XML export
//!
//! [`RwfmJobBoard`] implements the [`JobBoard`](taxa_application::JobBoard)
//! port over plain HTML pages; [`write_jobs_xml`] writes the collected
//! postings to disk.

mod board;
mod extract;
mod xml;

pub use board::{JobBoardSetupError, RwfmJobBoard};
pub use extract::{detail_text, extract_postings, normalize_link, posting_id};
pub use xml::{ExportError, jobs_to_xml, write_jobs_xml};
