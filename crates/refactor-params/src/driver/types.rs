//! Driver result types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Content changed (and was written, unless dry-run).
    Modified { rewrites: usize },
    /// No recognized call site; file left as-is.
    Unchanged,
    /// Path does not exist; skipped with a warning.
    Missing,
}

/// Per-file entry in the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rewrites_by_rule: BTreeMap<String, usize>,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    pub modified: usize,
    pub unchanged: usize,
    pub missing: usize,
    pub total_rewrites: usize,
    pub rewrites_by_rule: BTreeMap<String, usize>,
    pub duration_ms: u64,
}

impl RunSummary {
    /// Fold one file's report into the totals.
    pub fn record(&mut self, report: FileReport) {
        match report.outcome {
            FileOutcome::Modified { rewrites } => {
                self.modified += 1;
                self.total_rewrites += rewrites;
            }
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Missing => self.missing += 1,
        }
        for (rule, hits) in &report.rewrites_by_rule {
            *self.rewrites_by_rule.entry(rule.clone()).or_insert(0) += hits;
        }
        self.files.push(report);
    }
}
