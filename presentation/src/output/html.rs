//! HTML output
//!
//! Produces a results `<table>`: a header row and one `<tr>` per result.
//! Notice rows span every column.

use super::formatter::RowRenderer;
use quick_xml::escape::escape;
use taxa_domain::{OBSERVATIONS_LINK_LABEL, ResultRow};

/// Renders rows as an HTML table with escaped cell text
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Render one `<tr>`.
    pub fn row(row: &ResultRow) -> String {
        match row {
            ResultRow::Taxon(taxon) => {
                let [link, rest @ ..] = taxon.cells();
                let mut cells = vec![format!(
                    r#"<td><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></td>"#,
                    escape(link),
                    OBSERVATIONS_LINK_LABEL
                )];
                cells.extend(rest.iter().map(|c| format!("<td>{}</td>", escape(*c))));
                format!("<tr>{}</tr>", cells.concat())
            }
            ResultRow::Notice(notice) => format!(
                r#"<tr><td colspan="{}">{}</td></tr>"#,
                ResultRow::COLUMN_COUNT,
                escape(notice.message().as_str())
            ),
        }
    }

    fn header() -> String {
        let cells: String = ResultRow::COLUMNS
            .iter()
            .map(|c| format!("<th>{}</th>", c))
            .collect();
        format!("<thead><tr>{}</tr></thead>", cells)
    }
}

impl RowRenderer for HtmlRenderer {
    fn render(&self, rows: &[ResultRow]) -> String {
        let mut output = String::from("<table>\n");
        output.push_str(&Self::header());
        output.push_str("\n<tbody>\n");
        for row in rows {
            output.push_str(&Self::row(row));
            output.push('\n');
        }
        output.push_str("</tbody>\n</table>\n");
        output
    }
}
