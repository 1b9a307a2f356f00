//! Main application configuration

use serde::{Deserialize, Serialize};
use vss_providers::http::HttpClientConfig;

pub use super::logging::LoggingConfig;
pub use super::providers::{GyazoConfig, PastebinConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pastebin configuration
    #[serde(default)]
    pub pastebin: PastebinConfig,

    /// Gyazo configuration
    #[serde(default)]
    pub gyazo: GyazoConfig,

    /// Shared HTTP client settings
    #[serde(default)]
    pub http: HttpClientConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
