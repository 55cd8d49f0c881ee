//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::RefactorEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RefactorEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RefactorEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from receiving the event.
    fn emit<F: Fn(&dyn RefactorEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Run Lifecycle ----
    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }

    // ---- Per File ----
    pub fn emit_file_started(&self, event: &FileStartedEvent) {
        self.emit(|h| h.on_file_started(event));
    }

    pub fn emit_file_modified(&self, event: &FileModifiedEvent) {
        self.emit(|h| h.on_file_modified(event));
    }

    pub fn emit_file_unchanged(&self, event: &FileUnchangedEvent) {
        self.emit(|h| h.on_file_unchanged(event));
    }

    pub fn emit_file_missing(&self, event: &FileMissingEvent) {
        self.emit(|h| h.on_file_missing(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
