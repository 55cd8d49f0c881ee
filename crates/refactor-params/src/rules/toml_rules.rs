//! Declarative TOML rule definitions — extra call shapes without recompiling.
//!
//! ```toml
//! [[rules]]
//! name = "set_threshold"
//! call = "set_threshold"
//! params_type = "crate::thresholds::SetThresholdParams"
//! fields = ["ftype_id", "cfunc_id"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use refactor_params_core::errors::RuleError;

use super::rule::{CompiledRule, RewriteRule};

/// A TOML-defined rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRuleDef {
    pub name: String,
    pub call: String,
    pub params_type: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl From<TomlRuleDef> for RewriteRule {
    fn from(def: TomlRuleDef) -> Self {
        Self {
            name: def.name,
            call_name: def.call,
            params_type: def.params_type,
            fields: def.fields.into_iter().collect(),
        }
    }
}

/// A collection of TOML rule definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRuleFile {
    #[serde(default)]
    pub rules: Vec<TomlRuleDef>,
}

/// Loader for TOML rule definitions.
pub struct TomlRuleLoader;

impl TomlRuleLoader {
    /// Load and compile rules from a TOML string. Disabled rules are skipped.
    pub fn load_from_str(toml_str: &str) -> Result<Vec<CompiledRule>, RuleError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load and compile rules from a file.
    pub fn load_from_file(path: &Path) -> Result<Vec<CompiledRule>, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, source_name: &str) -> Result<Vec<CompiledRule>, RuleError> {
        let file: TomlRuleFile = toml::from_str(toml_str).map_err(|e| RuleError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let mut rules = Vec::new();
        for def in file.rules {
            if def.enabled == Some(false) {
                continue;
            }
            rules.push(RewriteRule::from(def).compile()?);
        }
        Ok(rules)
    }
}
