//! Reporters — how a run is presented.
//!
//! `console` streams progress lines as events arrive; `json` renders the
//! final `RunSummary`.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}
