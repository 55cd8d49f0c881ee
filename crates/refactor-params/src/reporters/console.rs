//! Console reporter — one progress line per file, then a total.

use std::io::Write;
use std::sync::Mutex;

use refactor_params_core::events::types::*;
use refactor_params_core::events::RefactorEventHandler;

/// Prints human-readable progress as the run advances.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    /// Reporter writing to `out`.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Reporter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout must not abort the rewrite itself.
            let _ = writeln!(out, "{text}");
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl RefactorEventHandler for ConsoleReporter {
    fn on_file_started(&self, event: &FileStartedEvent) {
        self.line(format_args!("Refactoring {}...", event.path.display()));
    }

    fn on_file_modified(&self, event: &FileModifiedEvent) {
        if event.dry_run {
            self.line(format_args!("  ✓ Would modify {}", event.path.display()));
        } else {
            self.line(format_args!("  ✓ Modified {}", event.path.display()));
        }
    }

    fn on_file_unchanged(&self, event: &FileUnchangedEvent) {
        self.line(format_args!("  - No changes in {}", event.path.display()));
    }

    fn on_file_missing(&self, event: &FileMissingEvent) {
        self.line(format_args!("⚠ File not found: {}", event.path.display()));
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        let verb = if event.dry_run {
            "Would refactor"
        } else {
            "Refactored"
        };
        self.line(format_args!("\n{} {} files", verb, event.modified));
    }
}
