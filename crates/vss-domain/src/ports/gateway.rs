//! HTTP Gateway Port
//!
//! The leaf abstraction both provider adapters post through. A gateway owns
//! a base URL and a credential; it joins endpoint paths and sends either a
//! form-encoded or a multipart body, handing back the raw status and body.
//!
//! Non-2xx replies are not errors at this layer. Interpreting the status is
//! the adapter's job; only transport failures (no reply at all) are
//! reported as [`Error::Network`](crate::error::Error::Network).

use async_trait::async_trait;

use crate::error::Result;

/// Raw reply from a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Create a response from status and body
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One part of a `multipart/form-data` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// Binary field carrying file content
    File {
        /// Field name
        name: String,
        /// File name announced in the part header
        file_name: String,
        /// MIME type of the content
        content_type: String,
        /// Raw file bytes
        bytes: Vec<u8>,
    },
}

impl MultipartPart {
    /// Create a text part
    pub fn text<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a binary file part
    pub fn file<N, F, C>(name: N, file_name: F, content_type: C, bytes: Vec<u8>) -> Self
    where
        N: Into<String>,
        F: Into<String>,
        C: Into<String>,
    {
        Self::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Field name of this part
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Ordered form fields; order is preserved on the wire
pub type FormFields = Vec<(String, String)>;

/// Outbound POST capability used by the provider adapters
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync`; adapters hold them behind an
/// `Arc` and never mutate them.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// Base URL every endpoint is joined onto
    fn base_url(&self) -> &str;

    /// Credential the adapters place into their request bodies
    fn credential(&self) -> &str;

    /// Join the base URL and an endpoint with exactly one slash between them
    fn build_url(&self, endpoint: &str) -> String {
        join_url(self.base_url(), endpoint)
    }

    /// True when both base URL and credential are non-empty
    fn is_configured(&self) -> bool {
        !self.base_url().is_empty() && !self.credential().is_empty()
    }

    /// POST `fields` as `application/x-www-form-urlencoded`
    async fn post_form(&self, endpoint: &str, fields: FormFields) -> Result<HttpResponse>;

    /// POST `parts` as `multipart/form-data`
    async fn post_multipart(
        &self,
        endpoint: &str,
        parts: Vec<MultipartPart>,
    ) -> Result<HttpResponse>;
}

/// Join a base URL and an endpoint, dropping one redundant slash on each side
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let path = endpoint.strip_prefix('/').unwrap_or(endpoint);
    format!("{base}/{path}")
}
