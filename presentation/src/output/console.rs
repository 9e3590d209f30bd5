//! Console table output for lookup results

use super::formatter::RowRenderer;
use colored::Colorize;
use taxa_domain::util::truncate_chars;
use taxa_domain::{NoticeKind, ResultRow};

/// Column widths, in characters
///
/// Fixed so rows can be printed one at a time and still line up. The last
/// column is never cut; its width only sizes the header underline.
const WIDTHS: [usize; ResultRow::COLUMN_COUNT] = [58, 36, 24, 17, 9, 13, 40, 40];

const SEPARATOR: &str = "  ";

/// Formats result rows as an aligned console table
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Column headings and an underline
    pub fn header() -> String {
        let titles = Self::line(&ResultRow::COLUMNS);
        let total = WIDTHS.iter().sum::<usize>() + SEPARATOR.len() * (WIDTHS.len() - 1);
        format!("{}\n{}", titles.cyan().bold(), "-".repeat(total))
    }

    /// One table line for a row
    pub fn row(row: &ResultRow) -> String {
        match row {
            ResultRow::Taxon(taxon) => {
                let line = Self::line(&taxon.cells());
                let split = line
                    .char_indices()
                    .nth(WIDTHS[0] + SEPARATOR.len())
                    .map_or(line.len(), |(i, _)| i);
                let (link, rest) = line.split_at(split);
                format!("{}{}", link.dimmed(), rest.green())
            }
            ResultRow::Notice(notice) => match notice.kind {
                NoticeKind::NotFound => notice.message().yellow().to_string(),
                NoticeKind::Error => notice.message().red().to_string(),
            },
        }
    }

    /// Tally line printed after the table
    pub fn summary(found: usize, not_found: usize, failed: usize) -> String {
        let total = found + not_found + failed;
        format!(
            "{} {} checked: {} found, {} not found, {} errors",
            "->".cyan(),
            total,
            found.to_string().green(),
            not_found.to_string().yellow(),
            failed.to_string().red()
        )
    }

    fn line(cells: &[&str; ResultRow::COLUMN_COUNT]) -> String {
        let last = cells.len() - 1;
        cells
            .iter()
            .zip(WIDTHS)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == last {
                    cell.to_string()
                } else {
                    format!("{:<width$}", fit(cell, width), width = width)
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
            .trim_end()
            .to_string()
    }
}

/// Shorten `text` to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        format!("{}~", truncate_chars(text, width.saturating_sub(1)))
    }
}

impl RowRenderer for ConsoleRenderer {
    fn render(&self, rows: &[ResultRow]) -> String {
        let mut output = Self::header();
        for row in rows {
            output.push('\n');
            output.push_str(&Self::row(row));
        }
        output.push('\n');
        output
    }
}
