//! XML export of job postings

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::path::Path;
use taxa_domain::JobPosting;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing the export file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("XML serialization failed: {0}")]
    Xml(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize postings as a `<jobs>` document.
///
/// Each posting becomes `<job id="...">` with `title`, `link`, `location`
/// and `description` children. The `id` attribute is written only when the
/// posting has one.
pub fn jobs_to_xml(postings: &[JobPosting]) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    write(&mut writer, Event::Start(BytesStart::new("jobs")))?;

    for posting in postings {
        let mut job = BytesStart::new("job");
        if posting.has_id() {
            job.push_attribute(("id", posting.id.as_str()));
        }
        write(&mut writer, Event::Start(job))?;

        for (name, value) in [
            ("title", &posting.title),
            ("link", &posting.link),
            ("location", &posting.location),
            ("description", &posting.description),
        ] {
            write(&mut writer, Event::Start(BytesStart::new(name)))?;
            write(&mut writer, Event::Text(BytesText::new(value)))?;
            write(&mut writer, Event::End(BytesEnd::new(name)))?;
        }

        write(&mut writer, Event::End(BytesEnd::new("job")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("jobs")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| ExportError::Xml(e.to_string()))
}

/// Write postings to `path`, replacing any existing file.
pub fn write_jobs_xml(postings: &[JobPosting], path: &Path) -> Result<(), ExportError> {
    let xml = jobs_to_xml(postings)?;
    std::fs::write(path, xml).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote {} jobs to {}", postings.len(), path.display());
    Ok(())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ExportError> {
    writer
        .write_event(event)
        .map_err(|e| ExportError::Xml(e.to_string()))
}
