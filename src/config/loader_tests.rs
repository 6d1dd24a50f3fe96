//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_rmdex_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("rmdex") && path_str.ends_with("config.toml"),
            "Path should contain 'rmdex' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_rmdex_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("rmdex.log"),
        "Default log path should end with 'rmdex.log', got: {:?}",
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
    let config_path = env::temp_dir().join("rmdex_test_config.toml");

    let toml_content = r#"
endpoint = "http://localhost:8080/api/character"
page_size = 50
sort_key = "status"
sort_order = "desc"
user_agent = "tester/1.0"
log_file_path = "/tmp/rmdex-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(
        config.endpoint.as_deref(),
        Some("http://localhost:8080/api/character")
    );
    assert_eq!(config.page_size, Some(PageSize::Fifty));
    assert_eq!(config.sort_key, Some(SortKey::Status));
    assert_eq!(config.sort_order, Some(SortOrder::Descending));
    assert_eq!(config.user_agent.as_deref(), Some("tester/1.0"));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/rmdex-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("rmdex_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unsupported_page_size() {
    let config_path = env::temp_dir().join("rmdex_test_bad_page_size.toml");

    fs::write(&config_path, "page_size = 25\n").expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "page_size = 25 should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("rmdex_test_partial.toml");

    fs::write(&config_path, "sort_key = \"gender\"\n# rest omitted\n")
        .expect("Failed to write partial test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.sort_key, Some(SortKey::Gender));
    assert_eq!(config.page_size, None);
    assert_eq!(config.endpoint, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"\n");
    assert!(result.is_err(), "Unknown field should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        page_size: Some(PageSize::Ten),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.page_size, PageSize::Ten);
    assert_eq!(resolved.endpoint, defaults.endpoint);
    assert_eq!(resolved.sort_key, defaults.sort_key);
    assert_eq!(resolved.sort_order, defaults.sort_order);
    assert_eq!(resolved.user_agent, defaults.user_agent);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.endpoint, "https://rickandmortyapi.com/api/character");
    assert_eq!(config.page_size, PageSize::Twenty);
    assert_eq!(config.sort_key, SortKey::Name);
    assert_eq!(config.sort_order, SortOrder::Ascending);
}

#[test]
fn initial_query_carries_sort_and_page_size() {
    let config = ResolvedConfig {
        page_size: PageSize::Fifty,
        sort_key: SortKey::Gender,
        sort_order: SortOrder::Descending,
        ..ResolvedConfig::default()
    };

    let query = config.initial_query();

    assert_eq!(query.page_size, PageSize::Fifty);
    assert_eq!(query.sort_key, SortKey::Gender);
    assert_eq!(query.sort_order, SortOrder::Descending);
    assert_eq!(query.page_index, 1);
    assert!(!query.has_filters());
}

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
#[serial(rmdex_endpoint)]
fn apply_env_overrides_respects_rmdex_endpoint() {
    let _guard = EnvGuard::new("RMDEX_ENDPOINT");

    env::set_var("RMDEX_ENDPOINT", "http://mirror.test/api/character");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.endpoint, "http://mirror.test/api/character");
    assert_eq!(result.page_size, ResolvedConfig::default().page_size);
}

#[test]
#[serial(rmdex_endpoint)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new("RMDEX_ENDPOINT");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(
        result, base,
        "Config should be unchanged when RMDEX_ENDPOINT not set"
    );
}

#[test]
#[serial(rmdex_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("RMDEX_CONFIG");

    let explicit = env::temp_dir().join("rmdex_test_explicit.toml");
    let from_env = env::temp_dir().join("rmdex_test_env.toml");
    fs::write(&explicit, "sort_key = \"status\"\n").unwrap();
    fs::write(&from_env, "sort_key = \"gender\"\n").unwrap();
    env::set_var("RMDEX_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(config.sort_key, Some(SortKey::Status));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(rmdex_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("RMDEX_CONFIG");

    let from_env = env::temp_dir().join("rmdex_test_env_only.toml");
    fs::write(&from_env, "page_size = 10\n").unwrap();
    env::set_var("RMDEX_CONFIG", &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.page_size, Some(PageSize::Ten));

    fs::remove_file(from_env).ok();
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    let result = apply_cli_overrides(base.clone(), None, None, None, None);
    assert_eq!(result, base);
}

#[test]
fn apply_cli_overrides_multiple_overrides() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some("http://cli.test/api".to_string()),
        Some(PageSize::Ten),
        Some(SortKey::Gender),
        Some(true),
    );

    assert_eq!(result.endpoint, "http://cli.test/api");
    assert_eq!(result.page_size, PageSize::Ten);
    assert_eq!(result.sort_key, SortKey::Gender);
    assert_eq!(result.sort_order, SortOrder::Descending);
}

#[test]
#[serial(rmdex_endpoint)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new("RMDEX_ENDPOINT");

    let config_file = ConfigFile {
        endpoint: Some("http://file.test/api".to_string()),
        page_size: Some(PageSize::Fifty),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(config_file));
    assert_eq!(merged.endpoint, "http://file.test/api");

    env::set_var("RMDEX_ENDPOINT", "http://env.test/api");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.endpoint, "http://env.test/api");

    let with_cli = apply_cli_overrides(
        with_env,
        Some("http://cli.test/api".to_string()),
        None,
        None,
        None,
    );
    assert_eq!(with_cli.endpoint, "http://cli.test/api");
    assert_eq!(
        with_cli.page_size,
        PageSize::Fifty,
        "Config file page size should survive when CLI leaves it unset"
    );
}
