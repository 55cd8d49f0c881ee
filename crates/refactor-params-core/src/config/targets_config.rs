//! Target file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Files migrated when no explicit list is configured, relative to the root.
pub const DEFAULT_TARGETS: &[&str] = &[
    "src/command_processor.rs",
    "src/ffi.rs",
    "tests/lib_tests.rs",
    "examples/basic_usage.rs",
    "examples/datasource_management.rs",
    "tests/test_set_feature_extended.rs",
];

/// Which files a run touches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TargetsConfig {
    /// Project root the target paths are resolved against. Default: ".".
    pub root: Option<PathBuf>,
    /// Target paths. Empty means `DEFAULT_TARGETS`.
    pub files: Vec<PathBuf>,
}

impl TargetsConfig {
    /// Returns the effective root, defaulting to the current directory.
    pub fn effective_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the effective target list, falling back to `DEFAULT_TARGETS`.
    pub fn effective_files(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        }
    }
}
