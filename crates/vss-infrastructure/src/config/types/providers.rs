//! Hosting service configuration types

use serde::{Deserialize, Serialize};
use vss_providers::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, GYAZO_DEFAULT_AUTH_URL, GYAZO_DEFAULT_BASE_URL,
    PASTEBIN_DEFAULT_BASE_URL,
};

/// Pastebin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastebinConfig {
    /// API root, `api_post.php` is appended to it
    pub base_url: String,

    /// Developer key sent as `api_dev_key`
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PastebinConfig {
    fn default() -> Self {
        Self {
            base_url: PASTEBIN_DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Gyazo settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GyazoConfig {
    /// Upload API root
    pub base_url: String,

    /// OAuth API root used for token requests
    pub auth_url: String,

    /// Access token sent with uploads
    pub access_token: String,

    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GyazoConfig {
    /// Whether both OAuth client credentials are present
    pub fn has_client_credentials(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.trim().is_empty()
    }
}

impl Default for GyazoConfig {
    fn default() -> Self {
        Self {
            base_url: GYAZO_DEFAULT_BASE_URL.to_string(),
            auth_url: GYAZO_DEFAULT_AUTH_URL.to_string(),
            access_token: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
