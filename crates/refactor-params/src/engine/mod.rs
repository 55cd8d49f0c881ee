//! Rewrite rule engine — ordered, single-pass application of rules to text.

pub mod rule_set;

pub use rule_set::{apply_all_rules, Rewrite, RuleSet, DEFAULT_INDENT};
