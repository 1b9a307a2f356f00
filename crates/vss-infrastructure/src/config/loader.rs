//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, CONFIG_VERBATIM_ENV_KEYS, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use vss_domain::error::{Error, Result};
use vss_providers::http::HttpClientConfig;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `VSS_PASTEBIN__API_KEY`)
    ///
    /// Credential values from the environment are taken as plain strings.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let env = Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR);
        let verbatim: Vec<(String, String)> = env
            .iter()
            .filter_map(|(key, value)| {
                let key = key.as_str().to_ascii_lowercase();
                CONFIG_VERBATIM_ENV_KEYS
                    .contains(&key.as_str())
                    .then_some((key, value))
            })
            .collect();

        figment = figment.merge(env);
        for (key, value) in verbatim {
            figment = figment.merge(Serialized::default(&key, value));
        }

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.is_file())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_endpoint("pastebin.base_url", &config.pastebin.base_url)?;
    validate_timeout("pastebin.timeout_secs", config.pastebin.timeout_secs)?;
    validate_endpoint("gyazo.base_url", &config.gyazo.base_url)?;
    validate_endpoint("gyazo.auth_url", &config.gyazo.auth_url)?;
    validate_timeout("gyazo.timeout_secs", config.gyazo.timeout_secs)?;
    validate_http_config(&config.http)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_endpoint(key: &str, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::configuration(format!("{key} cannot be empty")));
    }
    Ok(())
}

fn validate_timeout(key: &str, secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(Error::configuration(format!("{key} cannot be 0")));
    }
    Ok(())
}

fn validate_http_config(config: &HttpClientConfig) -> Result<()> {
    if config.user_agent.trim().is_empty() {
        return Err(Error::configuration("http.user_agent cannot be empty"));
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
