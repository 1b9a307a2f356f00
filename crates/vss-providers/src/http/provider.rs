//! Reqwest HTTP Gateway
//!
//! Concrete [`HttpGateway`] over a pooled `reqwest::Client`. The gateway
//! reports whatever status the provider sends back; it only fails when no
//! reply arrives at all.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vss_domain::error::{Error, Result};
use vss_domain::ports::{FormFields, HttpGateway, HttpResponse, MultipartPart};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, ERROR_MSG_REQUEST_TIMEOUT};

/// HTTP client configuration
///
/// Controls connection pooling, timeouts and the user agent of every
/// gateway built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    ///
    /// Not read from configuration files: each provider section sets its
    /// own `timeout_secs`, which replaces this value per gateway.
    #[serde(skip, default = "default_request_timeout")]
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 4,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            timeout: default_request_timeout(),
            user_agent: format!("vss/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build a reqwest client from this configuration
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .tcp_keepalive(self.keepalive)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
    }
}

/// Gateway posting to one provider through reqwest
///
/// ## Example
///
/// ```rust,no_run
/// use vss_domain::ports::HttpGateway;
/// use vss_providers::http::{HttpClientConfig, ReqwestHttpGateway};
///
/// fn example() -> vss_domain::Result<()> {
///     let gateway = ReqwestHttpGateway::with_config(
///         "https://pastebin.com/api",
///         "dev-key",
///         &HttpClientConfig::default(),
///     )?;
///     assert_eq!(
///         gateway.build_url("/api_post.php"),
///         "https://pastebin.com/api/api_post.php"
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpGateway {
    base_url: String,
    credential: String,
    timeout: Duration,
    client: Client,
}

impl ReqwestHttpGateway {
    /// Create a gateway over an existing client
    ///
    /// # Arguments
    /// * `base_url` - Provider API root, e.g. `https://upload.gyazo.com/api`
    /// * `credential` - API key or access token placed in request bodies
    /// * `timeout` - Timeout reported in network error messages
    /// * `client` - Reqwest HTTP client for making API requests
    pub fn new<B: Into<String>, C: Into<String>>(
        base_url: B,
        credential: C,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim().to_string(),
            credential: credential.into().trim().to_string(),
            timeout,
            client,
        }
    }

    /// Create a gateway with its own client built from `config`
    pub fn with_config<B: Into<String>, C: Into<String>>(
        base_url: B,
        credential: C,
        config: &HttpClientConfig,
    ) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self::new(base_url, credential, config.timeout, client))
    }

    fn send_error(&self, url: &str, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::network(format!(
                "{ERROR_MSG_REQUEST_TIMEOUT} {:?} posting to {url}",
                self.timeout
            ))
        } else {
            Error::network_with_source(format!("HTTP request to {url} failed"), err)
        }
    }

    async fn read_response(&self, url: &str, response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.send_error(url, e))?;
        debug!(url = url, status = status, "Provider replied");
        Ok(HttpResponse { status, body })
    }
}

fn multipart_form(parts: Vec<MultipartPart>) -> Result<Form> {
    parts.into_iter().try_fold(Form::new(), |form, part| match part {
        MultipartPart::Text { name, value } => Ok(form.text(name, value)),
        MultipartPart::File {
            name,
            file_name,
            content_type,
            bytes,
        } => {
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(&content_type)
                .map_err(|_| {
                    Error::invalid_argument(format!("Invalid content type '{content_type}'"))
                })?;
            Ok(form.part(name, part))
        }
    })
}

#[async_trait]
impl HttpGateway for ReqwestHttpGateway {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn credential(&self) -> &str {
        &self.credential
    }

    async fn post_form(&self, endpoint: &str, fields: FormFields) -> Result<HttpResponse> {
        let url = self.build_url(endpoint);
        debug!(url = %url, fields = fields.len(), "Posting form");

        let response = self
            .client
            .post(&url)
            .form(&fields)
            .send()
            .await
            .map_err(|e| self.send_error(&url, e))?;

        self.read_response(&url, response).await
    }

    async fn post_multipart(
        &self,
        endpoint: &str,
        parts: Vec<MultipartPart>,
    ) -> Result<HttpResponse> {
        let url = self.build_url(endpoint);
        debug!(url = %url, parts = parts.len(), "Posting multipart");

        let form = multipart_form(parts)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.send_error(&url, e))?;

        self.read_response(&url, response).await
    }
}
