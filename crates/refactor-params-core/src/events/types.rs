//! Event payload types for a refactoring run.

use std::path::PathBuf;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub root: PathBuf,
    pub target_count: usize,
    pub dry_run: bool,
}

/// Payload for `on_file_started`. Only emitted for files that exist.
#[derive(Debug, Clone)]
pub struct FileStartedEvent {
    pub path: PathBuf,
}

/// Payload for `on_file_modified`.
#[derive(Debug, Clone)]
pub struct FileModifiedEvent {
    pub path: PathBuf,
    /// Call sites rewritten in this file.
    pub rewrites: usize,
    /// True when the file was left on disk untouched.
    pub dry_run: bool,
}

/// Payload for `on_file_unchanged`.
#[derive(Debug, Clone)]
pub struct FileUnchangedEvent {
    pub path: PathBuf,
}

/// Payload for `on_file_missing`.
#[derive(Debug, Clone)]
pub struct FileMissingEvent {
    pub path: PathBuf,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub modified: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub duration_ms: u64,
    pub dry_run: bool,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
