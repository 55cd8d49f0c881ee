//! Refactorer — sequential read → rewrite → write-if-changed over the targets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use refactor_params_core::config::RefactorConfig;
use refactor_params_core::errors::{ErrorCode, RefactorError};
use refactor_params_core::events::types::*;
use refactor_params_core::events::EventDispatcher;

use super::types::{FileOutcome, FileReport, RunSummary};
use crate::engine::RuleSet;
use crate::rules::TomlRuleLoader;

/// Where and how a run operates.
#[derive(Debug, Clone)]
pub struct RefactorOptions {
    /// Relative targets are resolved against this directory.
    pub root: PathBuf,
    /// Processed in order.
    pub targets: Vec<PathBuf>,
    /// Rewrite in memory and report, but never write.
    pub dry_run: bool,
}

impl RefactorOptions {
    pub fn from_config(config: &RefactorConfig) -> Self {
        Self {
            root: config.targets.effective_root(),
            targets: config.targets.effective_files(),
            dry_run: config.rewrite.effective_dry_run(),
        }
    }
}

/// Applies a rule set to a fixed list of files.
pub struct Refactorer {
    rules: RuleSet,
    options: RefactorOptions,
}

impl Refactorer {
    pub fn new(rules: RuleSet, options: RefactorOptions) -> Self {
        Self { rules, options }
    }

    /// Build the rule set described by `config`: built-ins, then any rules
    /// from the rules file, minus disabled rules, with the configured indent.
    pub fn from_config(config: &RefactorConfig) -> Result<Self, RefactorError> {
        let mut rules = RuleSet::builtin().with_indent(config.rewrite.indent());
        if let Some(path) = config.resolved_rules_file() {
            for rule in TomlRuleLoader::load_from_file(&path)? {
                rules.push(rule)?;
            }
            tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rules file");
        }
        let rules = rules.without(config.rewrite.disabled_rules.as_slice());
        Ok(Self::new(rules, RefactorOptions::from_config(config)))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &RefactorOptions {
        &self.options
    }

    /// Resolve a target against the root. Absolute targets are used as-is.
    pub fn resolve(&self, target: &Path) -> PathBuf {
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.options.root.join(target)
        }
    }

    /// Rewrite one file in place.
    ///
    /// Missing files yield `FileOutcome::Missing`. A path whose existence
    /// cannot be determined, and read or write failures, are errors.
    pub fn refactor_file(&self, path: &Path) -> Result<FileReport, RefactorError> {
        if !path.try_exists().map_err(|e| RefactorError::io(path, e))? {
            return Ok(FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Missing,
                rewrites_by_rule: BTreeMap::new(),
            });
        }

        let original = std::fs::read_to_string(path).map_err(|e| RefactorError::io(path, e))?;
        let rewrite = self.rules.apply_with_stats(&original);

        let outcome = if rewrite.text != original {
            if !self.options.dry_run {
                std::fs::write(path, &rewrite.text).map_err(|e| RefactorError::io(path, e))?;
                tracing::info!(path = %path.display(), rewrites = rewrite.total(), "file rewritten");
            }
            FileOutcome::Modified {
                rewrites: rewrite.total(),
            }
        } else {
            FileOutcome::Unchanged
        };

        Ok(FileReport {
            path: path.to_path_buf(),
            outcome,
            rewrites_by_rule: rewrite.counts.into_iter().collect(),
        })
    }

    /// Process every target in order.
    ///
    /// Missing targets are reported and skipped. The first I/O failure
    /// aborts the run.
    pub fn run(&self, dispatcher: &EventDispatcher) -> Result<RunSummary, RefactorError> {
        let start = Instant::now();
        let dry_run = self.options.dry_run;

        dispatcher.emit_run_started(&RunStartedEvent {
            root: self.options.root.clone(),
            target_count: self.options.targets.len(),
            dry_run,
        });

        let mut summary = RunSummary {
            root: self.options.root.clone(),
            dry_run,
            ..Default::default()
        };

        for target in &self.options.targets {
            let path = self.resolve(target);

            let exists = match path.try_exists() {
                Ok(exists) => exists,
                Err(e) => return Err(fail(dispatcher, RefactorError::io(&path, e))),
            };

            if !exists {
                tracing::debug!(path = %path.display(), "target file not found");
                dispatcher.emit_file_missing(&FileMissingEvent { path: path.clone() });
                summary.record(FileReport {
                    path,
                    outcome: FileOutcome::Missing,
                    rewrites_by_rule: BTreeMap::new(),
                });
                continue;
            }

            dispatcher.emit_file_started(&FileStartedEvent { path: path.clone() });

            let report = self
                .refactor_file(&path)
                .map_err(|e| fail(dispatcher, e))?;

            match report.outcome {
                FileOutcome::Modified { rewrites } => {
                    dispatcher.emit_file_modified(&FileModifiedEvent {
                        path: path.clone(),
                        rewrites,
                        dry_run,
                    });
                }
                FileOutcome::Unchanged => {
                    dispatcher.emit_file_unchanged(&FileUnchangedEvent { path: path.clone() });
                }
                // Raced with a deletion between the check and the read.
                FileOutcome::Missing => {
                    dispatcher.emit_file_missing(&FileMissingEvent { path: path.clone() });
                }
            }

            summary.record(report);
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;

        dispatcher.emit_run_complete(&RunCompleteEvent {
            modified: summary.modified,
            unchanged: summary.unchanged,
            missing: summary.missing,
            duration_ms: summary.duration_ms,
            dry_run,
        });

        Ok(summary)
    }
}

/// Report a fatal error to the handlers and hand it back.
fn fail(dispatcher: &EventDispatcher, error: RefactorError) -> RefactorError {
    dispatcher.emit_error(&ErrorEvent {
        message: error.to_string(),
        error_code: error.error_code().to_string(),
    });
    error
}
