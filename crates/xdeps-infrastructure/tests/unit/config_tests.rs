//! Configuration loader tests

use std::env;
use std::fs;
use tempfile::TempDir;
use xdeps_domain::Error;
use xdeps_infrastructure::config::{AppConfig, CacheProviderKind, ConfigLoader};

/// Load `contents` from a temporary file, ignoring the process environment
fn load_toml(contents: &str) -> xdeps_domain::Result<AppConfig> {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("xdeps.toml");
    fs::write(&path, contents).expect("write config");
    ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("XDEPS_TEST_UNUSED")
        .load()
}

fn assert_configuration_error(result: xdeps_domain::Result<AppConfig>, needle: &str) {
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.cache.provider, CacheProviderKind::Moka);
    assert_eq!(config.cache.total_refs_ttl_secs, 3600);
    assert!(config.language.gateway_url.is_none());
    assert!(config.index.snapshot_path.is_none());
    assert!(config.index.languages.iter().any(|l| l == "go"));
    assert!(config.repositories.is_empty());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("XDEPS_TEST_UNUSED")
        .load()
        .expect("defaults are valid");
    assert_eq!(config.cache.total_refs_ttl_secs, 3600);
}

#[test]
fn test_config_file_reports_explicit_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let loader = ConfigLoader::new().with_config_path(&path);

    assert_eq!(loader.config_file(), Some(path.clone()));
    assert!(!path.exists());
}

#[test]
fn test_load_from_file() {
    let config = load_toml(
        r#"
        [cache]
        provider = "null"
        total_refs_ttl_secs = 120

        [language]
        gateway_url = "http://localhost:4388/xlang"
        timeout_secs = 5

        [request]
        timeout_secs = 0

        [index]
        snapshot_path = "/var/lib/xdeps/index.json"
        languages = ["go"]

        [[repositories]]
        id = 7
        uri = "github.com/gorilla/mux"
        languages = ["go"]

        [[repositories]]
        id = 8
        uri = "github.com/acme/internal"
        private = true
        authorized = false
        "#,
    )
    .expect("valid config");

    assert_eq!(config.cache.provider, CacheProviderKind::Null);
    assert_eq!(config.cache.total_refs_ttl_secs, 120);
    assert_eq!(
        config.language.gateway_url.as_deref(),
        Some("http://localhost:4388/xlang")
    );
    assert!(config.request.timeout().is_none());
    assert_eq!(config.index.languages, vec!["go".to_string()]);
    assert_eq!(config.repositories.len(), 2);
    assert!(config.repositories[0].authorized);
    assert!(!config.repositories[0].private);
    assert!(config.repositories[1].private);
    assert!(!config.repositories[1].authorized);
    assert!(config.repositories[1].languages.is_empty());
}

#[test]
fn test_unknown_cache_provider_rejected() {
    assert_configuration_error(
        load_toml("[cache]\nprovider = \"memcached\"\n"),
        "Failed to extract configuration",
    );
}

#[test]
fn test_zero_ttl_rejected() {
    assert_configuration_error(
        load_toml("[cache]\ntotal_refs_ttl_secs = 0\n"),
        "total_refs_ttl_secs",
    );
}

#[test]
fn test_redis_requires_url() {
    assert_configuration_error(load_toml("[cache]\nprovider = \"redis\"\n"), "redis_url");

    let config = load_toml("[cache]\nprovider = \"redis\"\nredis_url = \"redis://127.0.0.1:6379\"\n")
        .expect("redis with url");
    assert_eq!(config.cache.provider, CacheProviderKind::Redis);
}

#[test]
fn test_gateway_url_must_be_http() {
    assert_configuration_error(
        load_toml("[language]\ngateway_url = \"tcp://localhost:4388\"\n"),
        "gateway_url",
    );
}

#[test]
fn test_invalid_log_level_rejected() {
    assert_configuration_error(load_toml("[logging]\nlevel = \"loud\"\n"), "Invalid log level");
}

#[test]
fn test_duplicate_repositories_rejected() {
    assert_configuration_error(
        load_toml(
            r#"
            [[repositories]]
            id = 1
            uri = "github.com/a/a"

            [[repositories]]
            id = 1
            uri = "github.com/b/b"
            "#,
        ),
        "duplicate repository id 1",
    );
    assert_configuration_error(
        load_toml(
            r#"
            [[repositories]]
            id = 1
            uri = "github.com/a/a"

            [[repositories]]
            id = 2
            uri = "github.com/a/a"
            "#,
        ),
        "duplicate repository uri github.com/a/a",
    );
}

#[test]
fn test_env_overrides_file() {
    let prefix = "XDEPS_TEST_ENV_OVERRIDE";
    let key = format!("{prefix}__CACHE__TOTAL_REFS_TTL_SECS");
    // SAFETY: the variable name is unique to this test
    unsafe {
        env::set_var(&key, "60");
    }

    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("xdeps.toml");
    fs::write(&path, "[cache]\ntotal_refs_ttl_secs = 120\n").expect("write config");
    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix(prefix)
        .load();

    // SAFETY: as above
    unsafe {
        env::remove_var(&key);
    }
    assert_eq!(result.expect("valid config").cache.total_refs_ttl_secs, 60);
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("saved.toml");
    let loader = ConfigLoader::new().with_env_prefix("XDEPS_TEST_UNUSED");

    let mut config = AppConfig::default();
    config.cache.total_refs_ttl_secs = 90;
    config.index.languages = vec!["python".to_string()];
    loader.save_to_file(&config, &path).expect("save");

    let reloaded = loader.with_config_path(&path).load().expect("reload");
    assert_eq!(reloaded.cache.total_refs_ttl_secs, 90);
    assert_eq!(reloaded.index.languages, vec!["python".to_string()]);
}
