//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_adminview_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("adminview") && path_str.ends_with("config.toml"),
        "Path should contain 'adminview' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_adminview_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("adminview.log"),
        "Default log path should end with 'adminview.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("adminview_test_config.toml");

    let toml_content = r#"
page_size = 25
max_visible_pages = 7
narrow_max_visible_pages = 4
narrow_width = 100
collation_locale = "sv"
log_file_path = "/tmp/adminview-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    let config = result
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.max_visible_pages, Some(7));
    assert_eq!(config.narrow_max_visible_pages, Some(4));
    assert_eq!(config.narrow_width, Some(100));
    assert_eq!(config.collation_locale.as_deref(), Some("sv"));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/adminview-test.log"))
    );
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("adminview_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    fs::remove_file(&config_path).ok();

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("page_size = 5\ntheme = \"dark\"\n");
    assert!(result.is_err(), "Unknown field 'theme' should be rejected");
}

#[test]
fn partial_config_leaves_other_fields_none() {
    let config: ConfigFile = toml::from_str("narrow_width = 60\n").unwrap();
    assert_eq!(config.narrow_width, Some(60));
    assert_eq!(config.page_size, None);
    assert_eq!(config.collation_locale, None);
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        page_size: Some(20),
        collation_locale: Some("de".to_string()),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.page_size, 20);
    assert_eq!(resolved.collation_locale, "de");
    assert_eq!(resolved.max_visible_pages, defaults.max_visible_pages);
    assert_eq!(resolved.narrow_width, defaults.narrow_width);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.max_visible_pages, 5);
    assert_eq!(config.narrow_max_visible_pages, 3);
    assert_eq!(config.narrow_width, 80);
    assert_eq!(config.collation_locale, "en");
    assert!(!config.log_file_path.as_os_str().is_empty());
}

#[test]
fn validate_rejects_zero_settings() {
    let mut config = ResolvedConfig::default();
    assert_eq!(config.validate(), Ok(()));

    config.max_visible_pages = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            setting: "max_visible_pages",
            ..
        })
    ));

    let config = ResolvedConfig {
        page_size: 0,
        ..ResolvedConfig::default()
    };
    assert!(config.validate().is_err());
}

// ===== Environment =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(adminview_page_size)]
fn apply_env_overrides_respects_page_size() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    env::set_var(PAGE_SIZE_ENV_VAR, "42");

    let result = apply_env_overrides(ResolvedConfig::default()).unwrap();

    assert_eq!(result.page_size, 42, "ADMINVIEW_PAGE_SIZE should override page_size");
    assert_eq!(result.max_visible_pages, 5);
}

#[test]
#[serial(adminview_page_size)]
fn apply_env_overrides_rejects_garbage_and_zero() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);

    for raw in ["ten", "0", "-3"] {
        env::set_var(PAGE_SIZE_ENV_VAR, raw);
        let result = apply_env_overrides(ResolvedConfig::default());
        assert!(
            matches!(result, Err(ConfigError::InvalidValue { .. })),
            "'{raw}' should be rejected, got {result:?}"
        );
    }
}

#[test]
#[serial(adminview_page_size)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), Ok(base));
}

#[test]
#[serial(adminview_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let temp_dir = env::temp_dir();
    let explicit = temp_dir.join("adminview_test_explicit.toml");
    let from_env = temp_dir.join("adminview_test_env.toml");
    fs::write(&explicit, "page_size = 11\n").unwrap();
    fs::write(&from_env, "page_size = 22\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(Some(explicit.clone()));

    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();
    assert_eq!(result.unwrap().unwrap().page_size, Some(11));
}

#[test]
#[serial(adminview_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = env::temp_dir().join("adminview_test_env_only.toml");
    fs::write(&from_env, "collation_locale = \"fr\"\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let result = load_config_with_precedence(None);

    fs::remove_file(&from_env).ok();
    assert_eq!(
        result.unwrap().unwrap().collation_locale.as_deref(),
        Some("fr")
    );
}

// ===== CLI and full chain =====

#[test]
fn apply_cli_overrides_page_size() {
    let config = apply_cli_overrides(ResolvedConfig::default(), Some(3));
    assert_eq!(config.page_size, 3);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}

#[test]
#[serial(adminview_page_size)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(PAGE_SIZE_ENV_VAR);

    let file = ConfigFile {
        page_size: Some(15),
        narrow_width: Some(120),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file));
    assert_eq!(merged.page_size, 15);

    env::set_var(PAGE_SIZE_ENV_VAR, "30");
    let with_env = apply_env_overrides(merged).unwrap();
    assert_eq!(with_env.page_size, 30);

    let final_config = apply_cli_overrides(with_env, Some(50));
    assert_eq!(final_config.page_size, 50);
    assert_eq!(final_config.narrow_width, 120, "File value survives later layers");
}
