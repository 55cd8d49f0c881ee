//! File driver — load, rewrite, and conditionally store each target file.

pub mod refactorer;
pub mod types;

pub use refactorer::{RefactorOptions, Refactorer};
pub use types::{FileOutcome, FileReport, RunSummary};
