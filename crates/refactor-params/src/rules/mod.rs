//! Rewrite rules: one call-site shape per rule.
//!
//! Rules come from two places: the built-in table for the params-struct
//! migration, and optional TOML files declaring extra shapes.

pub mod builtin;
pub mod rule;
pub mod toml_rules;

pub use builtin::builtin_rules;
pub use rule::{CompiledRule, RewriteRule};
pub use toml_rules::{TomlRuleDef, TomlRuleFile, TomlRuleLoader};
