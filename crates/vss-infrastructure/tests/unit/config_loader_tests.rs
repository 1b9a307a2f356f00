//! Configuration Loader Tests

use std::env;
use std::time::Duration;

use tempfile::TempDir;
use vss_domain::error::Error;
use vss_infrastructure::config::loader::ConfigLoader;
use vss_infrastructure::config::{AppConfig, GyazoConfig, PastebinConfig};
use vss_infrastructure::constants::DEFAULT_LOG_LEVEL;

#[test]
fn test_config_loader_default() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("VSS_TEST_DEFAULTS")
        .load()
        .unwrap();

    assert_eq!(config.pastebin.base_url, "https://pastebin.com/api");
    assert_eq!(config.pastebin.timeout_secs, 30);
    assert!(config.pastebin.api_key.is_empty());
    assert_eq!(config.gyazo.base_url, "https://upload.gyazo.com/api");
    assert_eq!(config.gyazo.auth_url, "https://api.gyazo.com/api");
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(
        &path,
        r#"
[pastebin]
api_key = "dev-key-from-file"

[gyazo]
access_token = "token-from-file"
timeout_secs = 5
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_FILE")
        .load()
        .unwrap();

    assert_eq!(config.pastebin.api_key, "dev-key-from-file");
    assert_eq!(config.pastebin.base_url, "https://pastebin.com/api");
    assert_eq!(config.gyazo.access_token, "token-from-file");
    assert_eq!(config.gyazo.timeout_secs, 5);
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(&path, "[pastebin]\napi_key = \"from-file\"\n").unwrap();

    // SAFETY: the prefix is unique to this test, no other test reads these keys
    unsafe {
        env::set_var("VSS_TEST_ENV_PASTEBIN__API_KEY", "from-env");
        env::set_var("VSS_TEST_ENV_GYAZO__CLIENT_ID", "client-from-env");
    }

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_ENV")
        .load();

    // SAFETY: see above
    unsafe {
        env::remove_var("VSS_TEST_ENV_PASTEBIN__API_KEY");
        env::remove_var("VSS_TEST_ENV_GYAZO__CLIENT_ID");
    }

    let config = result.unwrap();
    assert_eq!(config.pastebin.api_key, "from-env");
    assert_eq!(config.gyazo.client_id, "client-from-env");
}

#[test]
fn test_empty_base_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(&path, "[pastebin]\nbase_url = \"  \"\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_EMPTY_URL")
        .load()
        .unwrap_err();

    match err {
        Error::Configuration { message, .. } => assert!(message.contains("pastebin.base_url")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(&path, "[gyazo]\ntimeout_secs = 0\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_ZERO_TIMEOUT")
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("gyazo.timeout_secs"));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(&path, "[pastebin\napi_key = ").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_MALFORMED")
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_numeric_looking_credentials_from_env_stay_strings() {
    let dir = TempDir::new().unwrap();

    // SAFETY: the prefix is unique to this test, no other test reads these keys
    unsafe {
        env::set_var("VSS_TEST_VERBATIM_PASTEBIN__API_KEY", "0012345");
        env::set_var("VSS_TEST_VERBATIM_GYAZO__ACCESS_TOKEN", "1.50");
        env::set_var("VSS_TEST_VERBATIM_GYAZO__CLIENT_ID", "true");
        env::set_var("VSS_TEST_VERBATIM_GYAZO__CLIENT_SECRET", "1234567890");
        env::set_var("VSS_TEST_VERBATIM_PASTEBIN__TIMEOUT_SECS", "7");
    }

    let result = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("VSS_TEST_VERBATIM")
        .load();

    // SAFETY: see above
    unsafe {
        env::remove_var("VSS_TEST_VERBATIM_PASTEBIN__API_KEY");
        env::remove_var("VSS_TEST_VERBATIM_GYAZO__ACCESS_TOKEN");
        env::remove_var("VSS_TEST_VERBATIM_GYAZO__CLIENT_ID");
        env::remove_var("VSS_TEST_VERBATIM_GYAZO__CLIENT_SECRET");
        env::remove_var("VSS_TEST_VERBATIM_PASTEBIN__TIMEOUT_SECS");
    }

    let config = result.unwrap();
    assert_eq!(config.pastebin.api_key, "0012345");
    assert_eq!(config.gyazo.access_token, "1.50");
    assert_eq!(config.gyazo.client_id, "true");
    assert_eq!(config.gyazo.client_secret, "1234567890");
    assert_eq!(config.pastebin.timeout_secs, 7);
    assert!(config.gyazo.has_client_credentials());
    assert!(!GyazoConfig::default().has_client_credentials());
}

#[test]
fn test_http_timeout_is_not_read_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vss.toml");
    std::fs::write(&path, "[http]\ntimeout = 1\nuser_agent = \"custom/1.0\"\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VSS_TEST_HTTP_TIMEOUT")
        .load()
        .unwrap();

    assert_eq!(config.http.user_agent, "custom/1.0");
    assert_eq!(config.http.timeout, Duration::from_secs(30));

    let saved = toml::to_string_pretty(&config).unwrap();
    assert!(!saved.contains("[http.timeout]"));
    assert!(saved.contains("timeout_secs = 30"));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let loader = ConfigLoader::new();
    let mut original = AppConfig {
        pastebin: PastebinConfig {
            api_key: "saved-key".to_string(),
            timeout_secs: 12,
            ..PastebinConfig::default()
        },
        gyazo: GyazoConfig {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            ..GyazoConfig::default()
        },
        ..AppConfig::default()
    };
    original.http.user_agent = "saved-agent/2.0".to_string();

    loader.save_to_file(&original, &config_path).unwrap();
    assert_eq!(loader.config_path(), None);

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("VSS_TEST_SAVE_LOAD")
        .load()
        .unwrap();

    assert_eq!(loaded, original);
}
