//! refactor-params: migrates SDK call sites to the `(config, params)` form.
//!
//! - Rules: call-site shapes, built-in or declared in TOML
//! - Engine: ordered single-pass application of rules to text
//! - Driver: read → rewrite → write-if-changed over a fixed target list
//! - Reporters: console progress lines and a JSON summary

pub mod driver;
pub mod engine;
pub mod reporters;
pub mod rules;

pub use driver::{FileOutcome, FileReport, RefactorOptions, Refactorer, RunSummary};
pub use engine::{apply_all_rules, Rewrite, RuleSet};
pub use reporters::{ConsoleReporter, JsonReporter, ReportFormat};
pub use rules::{builtin_rules, CompiledRule, RewriteRule, TomlRuleLoader};
