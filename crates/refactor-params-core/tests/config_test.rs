//! Tests for the refactor-params configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use refactor_params_core::config::{CliOverrides, RefactorConfig, PROJECT_CONFIG_FILE};
use refactor_params_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all REFACTOR_PARAMS_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "REFACTOR_PARAMS_ROOT",
        "REFACTOR_PARAMS_INDENT_WIDTH",
        "REFACTOR_PARAMS_DRY_RUN",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        r#"
[targets]
files = ["src/lib.rs"]

[rewrite]
indent_width = 4
dry_run = false
"#,
    )
    .unwrap();

    // Env overrides the project file
    std::env::set_var("REFACTOR_PARAMS_INDENT_WIDTH", "8");
    std::env::set_var("REFACTOR_PARAMS_DRY_RUN", "true");

    let cli = CliOverrides {
        dry_run: Some(false),
        ..Default::default()
    };

    let config = RefactorConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.targets.files, vec![PathBuf::from("src/lib.rs")]);
    assert_eq!(config.rewrite.indent_width, Some(8));
    // CLI beats env
    assert_eq!(config.rewrite.dry_run, Some(false));

    clear_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = RefactorConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.rewrite.effective_indent_width(), 20);
    assert_eq!(
        config.targets.effective_files(),
        vec![
            PathBuf::from("src/command_processor.rs"),
            PathBuf::from("src/ffi.rs"),
            PathBuf::from("tests/lib_tests.rs"),
            PathBuf::from("examples/basic_usage.rs"),
            PathBuf::from("examples/datasource_management.rs"),
            PathBuf::from("tests/test_set_feature_extended.rs"),
        ]
    );
}

#[test]
fn test_explicit_config_path_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        config_path: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };

    match RefactorConfig::load(dir.path(), Some(&cli)).unwrap_err() {
        ConfigError::FileNotFound { path } => assert!(path.ends_with("nope.toml")),
        other => panic!("Expected FileNotFound, got: {:?}", other),
    }
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "not toml {{{{").unwrap();

    match RefactorConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_indent_width_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        r#"
[rewrite]
indent_width = 64
"#,
    )
    .unwrap();

    match RefactorConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "rewrite.indent_width");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_blank_disabled_rule_rejected() {
    let config = RefactorConfig::from_toml(
        r#"
[rewrite]
disabled_rules = ["add_feature", "  "]
"#,
    )
    .unwrap();
    assert!(matches!(
        RefactorConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("REFACTOR_PARAMS_INDENT_WIDTH", "wide");

    let config = RefactorConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.rewrite.indent_width, None);

    clear_env_vars();
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = RefactorConfig::from_toml(
        r#"
[targets]
root = "/srv/sdk"
files = ["src/ffi.rs"]

[rewrite]
indent_width = 12
disabled_rules = ["set_feature"]
"#,
    )
    .unwrap();

    let reparsed = RefactorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.targets.root, Some(PathBuf::from("/srv/sdk")));
    assert_eq!(reparsed.rewrite.indent_width, Some(12));
    assert_eq!(reparsed.rewrite.disabled_rules, vec!["set_feature".to_string()]);
}
