//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use refactor_params::ReportFormat;
use refactor_params_core::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "refactor-params")]
#[command(about = "Bundle trailing positional arguments of SDK calls into params structs", long_about = None)]
pub struct Cli {
    /// Files to migrate, relative to the root. Replaces the configured list.
    pub files: Vec<PathBuf>,

    /// Project root; also where `refactor-params.toml` is looked up
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Explicit config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra TOML rule definitions
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Report changes without writing files
    #[arg(long, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Write files even if config or `REFACTOR_PARAMS_DRY_RUN` asks for a dry run
    #[arg(long, overrides_with = "dry_run")]
    pub no_dry_run: bool,

    /// Spaces before each emitted field line
    #[arg(long)]
    pub indent: Option<usize>,

    /// Skip a rule by name (repeatable)
    #[arg(long = "disable", value_name = "RULE")]
    pub disabled_rules: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub format: ReportFormat,
}

impl Cli {
    /// Directory searched for the project config file.
    pub fn search_root(&self) -> PathBuf {
        self.root
            .clone()
            .or_else(|| std::env::var_os("REFACTOR_PARAMS_ROOT").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// `--dry-run` and `--no-dry-run` override each other; the last one wins.
    fn dry_run_override(&self) -> Option<bool> {
        match (self.dry_run, self.no_dry_run) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            root: self.root.clone(),
            files: self.files.clone(),
            indent_width: self.indent,
            rules_file: self.rules.clone(),
            disabled_rules: self.disabled_rules.clone(),
            dry_run: self.dry_run_override(),
        }
    }
}
