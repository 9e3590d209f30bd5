//! Live table printing
//!
//! Prints the table header when a batch starts and each row the moment its
//! lookup completes, so results appear in input order as they arrive.

use crate::output::ConsoleRenderer;
use std::io::Write;
use std::sync::Mutex;
use taxa_application::BatchProgressNotifier;
use taxa_domain::{LookupOutcome, ResultRow};

/// Batch notifier that writes table rows to a sink as items complete
pub struct LiveTable<W: Write + Send> {
    out: Mutex<W>,
}

impl LiveTable<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> LiveTable<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout (e.g. `| head`) must not abort the batch
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }
}

impl<W: Write + Send> BatchProgressNotifier for LiveTable<W> {
    fn on_batch_start(&self, _total: usize) {
        self.write_line(&ConsoleRenderer::header());
    }

    fn on_item_complete(&self, _index: usize, outcome: &LookupOutcome) {
        self.write_line(&ConsoleRenderer::row(&ResultRow::from_outcome(outcome)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_written_as_they_complete() {
        colored::control::set_override(false);
        let table = LiveTable::new(Vec::new());

        table.on_batch_start(2);
        table.on_item_complete(0, &LookupOutcome::not_found("Not A Real Species"));
        table.on_item_complete(1, &LookupOutcome::failed("Lynx", "timeout"));

        let written = String::from_utf8(table.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Observations"));
        assert_eq!(lines[2], "Species not found: Not A Real Species");
        assert_eq!(lines[3], "Error checking species: Lynx");
    }
}
