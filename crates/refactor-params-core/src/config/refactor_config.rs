//! Top-level refactor-params configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::rewrite_config::MAX_INDENT_WIDTH;
use super::{RewriteConfig, TargetsConfig};
use crate::errors::ConfigError;

/// Project config file looked up in the root when no explicit path is given.
pub const PROJECT_CONFIG_FILE: &str = "refactor-params.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`REFACTOR_PARAMS_*`)
/// 3. Project config (`refactor-params.toml` in the root, or `--config`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RefactorConfig {
    pub targets: TargetsConfig,
    pub rewrite: RewriteConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file. Unlike the implicit project file, it must exist.
    pub config_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    pub indent_width: Option<usize>,
    pub rules_file: Option<PathBuf>,
    pub disabled_rules: Vec<String>,
    pub dry_run: Option<bool>,
}

impl RefactorConfig {
    /// Load configuration with layered resolution.
    ///
    /// `root` is the directory searched for `refactor-params.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match cli_overrides.and_then(|cli| cli.config_path.as_deref()) {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, explicit)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RefactorConfig) -> Result<(), ConfigError> {
        if let Some(width) = config.rewrite.indent_width {
            if width > MAX_INDENT_WIDTH {
                return Err(ConfigError::ValidationFailed {
                    field: "rewrite.indent_width".to_string(),
                    message: format!("must be at most {MAX_INDENT_WIDTH}"),
                });
            }
        }
        if config.targets.files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "targets.files".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
        if config.rewrite.disabled_rules.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "rewrite.disabled_rules".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RefactorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RefactorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut RefactorConfig, other: &RefactorConfig) {
        // Targets
        if other.targets.root.is_some() {
            base.targets.root = other.targets.root.clone();
        }
        if !other.targets.files.is_empty() {
            base.targets.files = other.targets.files.clone();
        }

        // Rewrite
        if other.rewrite.indent_width.is_some() {
            base.rewrite.indent_width = other.rewrite.indent_width;
        }
        if !other.rewrite.disabled_rules.is_empty() {
            base.rewrite.disabled_rules = other.rewrite.disabled_rules.clone();
        }
        if other.rewrite.rules_file.is_some() {
            base.rewrite.rules_file = other.rewrite.rules_file.clone();
        }
        if other.rewrite.dry_run.is_some() {
            base.rewrite.dry_run = other.rewrite.dry_run;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `REFACTOR_PARAMS_ROOT`, `REFACTOR_PARAMS_INDENT_WIDTH`, etc.
    fn apply_env_overrides(config: &mut RefactorConfig) {
        if let Some(val) = std::env::var_os("REFACTOR_PARAMS_ROOT") {
            if !val.is_empty() {
                config.targets.root = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("REFACTOR_PARAMS_INDENT_WIDTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.rewrite.indent_width = Some(v);
            }
        }
        if let Ok(val) = std::env::var("REFACTOR_PARAMS_DRY_RUN") {
            if let Ok(v) = val.parse::<bool>() {
                config.rewrite.dry_run = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RefactorConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.root {
            config.targets.root = Some(v.clone());
        }
        if !cli.files.is_empty() {
            config.targets.files = cli.files.clone();
        }
        if let Some(v) = cli.indent_width {
            config.rewrite.indent_width = Some(v);
        }
        if let Some(ref v) = cli.rules_file {
            config.rewrite.rules_file = Some(v.clone());
        }
        if !cli.disabled_rules.is_empty() {
            config.rewrite.disabled_rules = cli.disabled_rules.clone();
        }
        if let Some(v) = cli.dry_run {
            config.rewrite.dry_run = Some(v);
        }
    }

    /// Resolve the rules file against the effective root.
    pub fn resolved_rules_file(&self) -> Option<PathBuf> {
        self.rewrite.rules_file.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.targets.effective_root().join(path)
            }
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
