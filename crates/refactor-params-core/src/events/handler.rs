//! RefactorEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a refactoring run.
///
/// Handlers only override the events they care about.
pub trait RefactorEventHandler: Send + Sync {
    // ---- Run Lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}

    // ---- Per File ----
    fn on_file_started(&self, _event: &FileStartedEvent) {}
    fn on_file_modified(&self, _event: &FileModifiedEvent) {}
    fn on_file_unchanged(&self, _event: &FileUnchangedEvent) {}
    fn on_file_missing(&self, _event: &FileMissingEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
