//! Client Factory
//!
//! Wires configuration into the provider adapters. Every adapter gets its
//! own `ReqwestHttpGateway` built from the shared HTTP settings with the
//! provider's timeout applied.
//!
//! All adapter implementations come from the `vss-providers` crate; this
//! module only handles wiring.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use vss_domain::error::{Error, Result};
use vss_domain::ports::{HttpGateway, ImageProvider, PasteProvider};
use vss_providers::gyazo::{GyazoAuth, GyazoClient};
use vss_providers::http::{HttpClientConfig, ReqwestHttpGateway};
use vss_providers::pastebin::PastebinClient;

use crate::config::AppConfig;

/// Builds the Pastebin and Gyazo clients described by an [`AppConfig`]
pub struct ClientFactory {
    config: AppConfig,
    pastebin: PastebinClient,
    gyazo: GyazoClient,
    gyazo_auth: GyazoAuth,
}

impl ClientFactory {
    /// Build every client from `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        if config.pastebin.api_key.trim().is_empty() {
            debug!("Pastebin API key is not configured");
        }

        let pastebin = PastebinClient::new(gateway(
            &config.pastebin.base_url,
            &config.pastebin.api_key,
            &config.http,
            config.pastebin.timeout_secs,
        )?);
        let gyazo = GyazoClient::new(gateway(
            &config.gyazo.base_url,
            &config.gyazo.access_token,
            &config.http,
            config.gyazo.timeout_secs,
        )?);
        let gyazo_auth = GyazoAuth::new(gateway(
            &config.gyazo.auth_url,
            "",
            &config.http,
            config.gyazo.timeout_secs,
        )?);

        Ok(Self {
            config: config.clone(),
            pastebin,
            gyazo,
            gyazo_auth,
        })
    }

    /// Configuration the clients were built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pastebin client using the configured developer key
    pub fn pastebin(&self) -> &PastebinClient {
        &self.pastebin
    }

    /// Pastebin client behind the paste port
    pub fn paste_provider(&self) -> Arc<dyn PasteProvider> {
        Arc::new(self.pastebin.clone())
    }

    /// Gyazo client using the configured access token as-is
    pub fn gyazo(&self) -> &GyazoClient {
        &self.gyazo
    }

    /// Gyazo client behind the image port
    pub fn image_provider(&self) -> Arc<dyn ImageProvider> {
        Arc::new(self.gyazo.clone())
    }

    /// Gyazo OAuth helper pointed at the configured auth URL
    pub fn gyazo_auth(&self) -> &GyazoAuth {
        &self.gyazo_auth
    }

    /// Request a fresh access token with the configured client credentials
    pub async fn fetch_access_token(&self) -> Result<String> {
        let gyazo = &self.config.gyazo;
        if !gyazo.has_client_credentials() {
            return Err(Error::configuration(
                "Gyazo client_id and client_secret must be set to request a token",
            ));
        }
        self.gyazo_auth
            .get_access_token(gyazo.client_id.trim(), gyazo.client_secret.trim())
            .await
    }

    /// Gyazo client with a usable access token
    ///
    /// Uses the configured token when there is one; otherwise exchanges the
    /// client credentials for a new token first.
    pub async fn gyazo_client_with_token(&self) -> Result<GyazoClient> {
        if self.gyazo.gateway().is_configured() {
            return Ok(self.gyazo.clone());
        }

        if !self.config.gyazo.has_client_credentials() {
            warn!("Gyazo has neither an access token nor client credentials");
            return Err(Error::configuration(
                "Gyazo access_token or client_id/client_secret must be configured",
            ));
        }

        let token = self.fetch_access_token().await?;
        info!("Using freshly issued Gyazo access token");
        Ok(GyazoClient::new(gateway(
            &self.config.gyazo.base_url,
            &token,
            &self.config.http,
            self.config.gyazo.timeout_secs,
        )?))
    }
}

fn gateway(
    base_url: &str,
    credential: &str,
    http: &HttpClientConfig,
    timeout_secs: u64,
) -> Result<Arc<dyn HttpGateway>> {
    let config = HttpClientConfig {
        timeout: Duration::from_secs(timeout_secs),
        ..http.clone()
    };
    Ok(Arc::new(ReqwestHttpGateway::with_config(
        base_url, credential, &config,
    )?))
}
