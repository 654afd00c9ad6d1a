//! Configuration loader tests
//!
//! Each test uses its own environment prefix, so they can run in parallel.

use hs_application::registry::DEFAULT_MAX_IN_MEMORY_SIZE;
use hs_domain::error::Error;
use hs_infrastructure::config::{ConfigLoader, StrategiesConfig};
use hs_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

use crate::support::{remove_env, set_env};

fn loader_with_file(dir: &TempDir, contents: &str, env_prefix: &str) -> ConfigLoader {
    let path = dir.path().join("hs.toml");
    std::fs::write(&path, contents).expect("write config file");
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(env_prefix)
}

#[test]
fn test_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix("HS_TEST_DEFAULTS")
        .load()
        .expect("defaults load");

    assert!(config.codecs.register_defaults);
    assert_eq!(config.codecs.max_in_memory_size, DEFAULT_MAX_IN_MEMORY_SIZE);
    assert!(config.codecs.readers.is_empty());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = loader_with_file(
        &dir,
        r#"
[codecs]
max_in_memory_size = 2048
readers = ["json"]

[logging]
level = "warn"
json_format = true
"#,
        "HS_TEST_FILE",
    );

    let config = loader.load().expect("file config loads");
    assert_eq!(config.codecs.max_in_memory_size, 2048);
    assert_eq!(config.codecs.readers, ["json"]);
    assert!(config.codecs.writers.is_empty());
    assert!(config.codecs.register_defaults);
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.json_format);
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let loader = loader_with_file(
        &dir,
        "[logging]\nlevel = \"warn\"\n",
        "HS_TEST_ENV",
    );
    set_env("HS_TEST_ENV_LOGGING__LEVEL", "debug");
    set_env("HS_TEST_ENV_CODECS__MAX_IN_MEMORY_SIZE", "1024");

    let result = loader.load();

    remove_env("HS_TEST_ENV_LOGGING__LEVEL");
    remove_env("HS_TEST_ENV_CODECS__MAX_IN_MEMORY_SIZE");

    let config = result.expect("env config loads");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.codecs.max_in_memory_size, 1024);
}

#[test]
fn test_invalid_log_level_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = loader_with_file(&dir, "[logging]\nlevel = \"loud\"\n", "HS_TEST_LEVEL");

    let err = loader.load().expect_err("invalid level must fail");
    assert!(matches!(err, Error::Configuration { .. }), "{err}");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_zero_buffer_limit_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = loader_with_file(
        &dir,
        "[codecs]\nmax_in_memory_size = 0\n",
        "HS_TEST_LIMIT",
    );

    let err = loader.load().expect_err("zero limit must fail");
    assert!(err.to_string().contains("max_in_memory_size"), "{err}");
}

#[test]
fn test_unknown_codec_name_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = loader_with_file(
        &dir,
        "[codecs]\nwriters = [\"protobuf\"]\n",
        "HS_TEST_UNKNOWN",
    );

    let err = loader.load().expect_err("unknown writer must fail");
    assert!(
        err.to_string()
            .contains("Unknown message writer 'protobuf'"),
        "{err}"
    );
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("HS_TEST_SAVE");

    let mut config = StrategiesConfig::default();
    config.codecs.register_defaults = false;
    config.codecs.writers = vec!["string".to_string()];
    config.logging.level = "trace".to_string();
    loader.save_to_file(&config, &path).expect("config saves");

    let loaded = loader.load().expect("saved config loads");
    assert!(!loaded.codecs.register_defaults);
    assert_eq!(loaded.codecs.writers, ["string"]);
    assert_eq!(loaded.logging.level, "trace");
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_to_codec_config() {
    let mut config = StrategiesConfig::default();
    config.codecs.max_in_memory_size = 64;
    config
        .codecs
        .extra
        .insert("pretty".to_string(), "true".to_string());

    let codec_config = config.codecs.to_codec_config();
    assert_eq!(codec_config.max_in_memory_size, 64);
    assert_eq!(codec_config.extra.get("pretty").map(String::as_str), Some("true"));
}
