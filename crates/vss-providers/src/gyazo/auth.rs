//! Gyazo OAuth token acquisition (client credentials flow)

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use vss_domain::error::{Error, Result};
use vss_domain::ports::{FormFields, HttpGateway};

use crate::constants::{GYAZO_GRANT_TYPE, GYAZO_REDIRECT_URI, GYAZO_TOKEN_ENDPOINT};
use crate::utils::{HttpResponseUtils, JsonExt};

const PROVIDER_NAME: &str = "Gyazo OAuth";

/// Obtains Gyazo access tokens
///
/// The gateway points at the OAuth API root (`https://api.gyazo.com/api`);
/// its credential is unused. Tokens are returned to the caller and never
/// cached here.
#[derive(Clone)]
pub struct GyazoAuth {
    gateway: Arc<dyn HttpGateway>,
}

impl fmt::Debug for GyazoAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GyazoAuth")
            .field("base_url", &self.gateway.base_url())
            .finish_non_exhaustive()
    }
}

impl GyazoAuth {
    /// Create a new token helper
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Exchange client credentials for an access token
    pub async fn get_access_token(&self, client_id: &str, client_secret: &str) -> Result<String> {
        debug!(url = %self.gateway.build_url(GYAZO_TOKEN_ENDPOINT), "Requesting access token");

        let fields: FormFields = vec![
            ("client_id".into(), client_id.into()),
            ("client_secret".into(), client_secret.into()),
            ("grant_type".into(), GYAZO_GRANT_TYPE.into()),
            ("redirect_uri".into(), GYAZO_REDIRECT_URI.into()),
        ];

        let response = self.gateway.post_form(GYAZO_TOKEN_ENDPOINT, fields).await?;
        let reply: serde_json::Value = HttpResponseUtils::check_and_parse(&response, PROVIDER_NAME)
            .map_err(|e| match e {
                Error::Api { status, message } => Error::Api {
                    status,
                    message: format!("Failed to get access token: {message}"),
                },
                other => other,
            })?;

        let token = reply
            .opt_str("access_token")
            .ok_or_else(|| Error::api(response.status, "No access_token in response"))?;

        info!("Access token obtained");
        Ok(token.to_string())
    }
}
