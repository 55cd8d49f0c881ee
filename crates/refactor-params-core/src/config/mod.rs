//! Configuration system for refactor-params.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod refactor_config;
pub mod rewrite_config;
pub mod targets_config;

pub use refactor_config::{CliOverrides, RefactorConfig, PROJECT_CONFIG_FILE};
pub use rewrite_config::RewriteConfig;
pub use targets_config::{TargetsConfig, DEFAULT_TARGETS};
