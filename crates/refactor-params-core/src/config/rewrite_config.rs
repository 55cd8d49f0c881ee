//! Rewrite behavior configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Indentation the reconstructed field lines get when nothing is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 20;

/// Upper bound accepted for `indent_width`.
pub const MAX_INDENT_WIDTH: usize = 32;

/// Configuration for how call sites are rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RewriteConfig {
    /// Spaces before each emitted `field: value,` line. Default: 20.
    pub indent_width: Option<usize>,
    /// Built-in or declared rules to skip, by name.
    pub disabled_rules: Vec<String>,
    /// Extra TOML rule definitions, resolved against the root when relative.
    pub rules_file: Option<PathBuf>,
    /// Report what would change without writing. Default: false.
    pub dry_run: Option<bool>,
}

impl RewriteConfig {
    /// Returns the effective indent width, defaulting to 20.
    pub fn effective_indent_width(&self) -> usize {
        self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH)
    }

    /// Returns the indent string emitted before each field line.
    pub fn indent(&self) -> String {
        " ".repeat(self.effective_indent_width())
    }

    /// Returns whether this is a dry run, defaulting to false.
    pub fn effective_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }
}
