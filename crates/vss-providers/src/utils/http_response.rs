//! HTTP Response Utilities
//!
//! Helper functions for interpreting raw gateway replies. These are shared
//! utilities, not ports.

use serde::de::DeserializeOwned;
use tracing::error;

use vss_domain::error::{Error, Result};
use vss_domain::ports::HttpResponse;

use crate::utils::json::normalize_keys;

/// Format error message for a provider reply
fn api_error(provider: &str, status: u16, context: &str, details: &str) -> Error {
    Error::api(status, format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by the paste and image
/// adapters.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Fail with an API error unless the status is 2xx
    ///
    /// # Arguments
    /// * `response` - The raw reply from the gateway
    /// * `provider_name` - Name of the provider for error messages
    pub fn ensure_success(response: &HttpResponse, provider_name: &str) -> Result<()> {
        if response.is_success() {
            return Ok(());
        }

        let code = response.status;
        let details = if response.body.trim().is_empty() {
            "empty response body"
        } else {
            response.body.as_str()
        };
        error!(provider = provider_name, status = code, body = %response.body, "Provider request failed");

        Err(match code {
            401 | 403 => api_error(provider_name, code, "authentication failed", details),
            429 => api_error(provider_name, code, "rate limit exceeded", details),
            500..=599 => api_error(
                provider_name,
                code,
                &format!("server error ({code})"),
                details,
            ),
            _ => api_error(
                provider_name,
                code,
                &format!("request failed ({code})"),
                details,
            ),
        })
    }

    /// Check the status, then parse the body as a JSON object into `T`
    ///
    /// Keys are normalized to snake_case first, so `imageId`, `ImageId` and
    /// `image_id` all land on the same field.
    pub fn check_and_parse<T: DeserializeOwned>(
        response: &HttpResponse,
        provider_name: &str,
    ) -> Result<T> {
        Self::ensure_success(response, provider_name)?;

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            Error::deserialization_with_source(format!("{provider_name} response parse failed"), e)
        })?;

        if !value.is_object() {
            return Err(Error::deserialization(format!(
                "{provider_name} response is not a JSON object"
            )));
        }

        serde_json::from_value(normalize_keys(value)).map_err(|e| {
            Error::deserialization_with_source(
                format!("{provider_name} response missing expected fields"),
                e,
            )
        })
    }
}
