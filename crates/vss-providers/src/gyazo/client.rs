//! Gyazo Image Provider
//!
//! Implements the `ImageProvider` port using Gyazo's multipart upload API.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, Utc};
use tracing::{debug, error, info};

use vss_domain::constants::{SCREENSHOT_TITLE_PREFIX, SCREENSHOT_TITLE_TIME_FORMAT};
use vss_domain::error::{Error, Result};
use vss_domain::ports::{HttpGateway, ImageProvider, MultipartPart};
use vss_domain::value_objects::{ImageInfo, UploadRequest, content_type_for_path};

use crate::constants::{
    GYAZO_FIELD_ACCESS_TOKEN, GYAZO_FIELD_DESC, GYAZO_FIELD_IMAGE_DATA, GYAZO_FIELD_TITLE,
    GYAZO_UPLOAD_ENDPOINT,
};
use crate::utils::{HttpResponseUtils, ensure_file, file_name_of};

const PROVIDER_NAME: &str = "Gyazo";

/// Gyazo image provider
///
/// The gateway's credential is the OAuth access token (see
/// [`GyazoAuth`](crate::gyazo::GyazoAuth) for obtaining one).
#[derive(Clone)]
pub struct GyazoClient {
    gateway: Arc<dyn HttpGateway>,
}

impl fmt::Debug for GyazoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GyazoClient")
            .field("base_url", &self.gateway.base_url())
            .finish_non_exhaustive()
    }
}

impl GyazoClient {
    /// Create a new Gyazo client
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Gateway this client posts through
    pub fn gateway(&self) -> &Arc<dyn HttpGateway> {
        &self.gateway
    }

    /// Upload an image file
    ///
    /// Fails with `NotFound` before touching the network when the file is
    /// missing. `title` and `desc` are only sent when non-blank.
    pub async fn upload_image(&self, request: &UploadRequest) -> Result<ImageInfo> {
        let path = request.image_path.as_path();
        debug!(path = %path.display(), timestamp = ?request.timestamp, "Uploading image");

        if let Err(e) = ensure_file(path).await {
            error!(path = %path.display(), error = %e, "Image file not accessible");
            return Err(e);
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read {}", path.display()), e)
        })?;

        let mut parts = vec![
            MultipartPart::text(GYAZO_FIELD_ACCESS_TOKEN, self.gateway.credential()),
            MultipartPart::file(
                GYAZO_FIELD_IMAGE_DATA,
                file_name_of(path),
                content_type_for_path(path),
                bytes,
            ),
        ];
        if let Some(title) = non_blank(request.title.as_deref()) {
            parts.push(MultipartPart::text(GYAZO_FIELD_TITLE, title));
        }
        if let Some(desc) = non_blank(request.description.as_deref()) {
            parts.push(MultipartPart::text(GYAZO_FIELD_DESC, desc));
        }

        debug!(url = %self.gateway.build_url(GYAZO_UPLOAD_ENDPOINT), "Posting to Gyazo API");
        let response = self
            .gateway
            .post_multipart(GYAZO_UPLOAD_ENDPOINT, parts)
            .await
            .inspect_err(|e| error!(path = %path.display(), error = %e, "Failed to upload image"))?;

        let info: ImageInfo = HttpResponseUtils::check_and_parse(&response, PROVIDER_NAME)?;
        info!(permalink = %info.permalink_url, "Image uploaded successfully");
        Ok(info)
    }

    /// Upload a screenshot with a generated title and capture timestamp
    pub async fn share_screenshot<P: AsRef<Path>>(&self, path: P) -> Result<ImageInfo> {
        let path = path.as_ref();
        ensure_file(path).await?;

        let request = UploadRequest::new(path)
            .with_title(screenshot_title())
            .with_timestamp(Utc::now().timestamp());

        self.upload_image(&request).await
    }
}

/// Title for a screenshot taken now, in local time
pub fn screenshot_title() -> String {
    format!(
        "{SCREENSHOT_TITLE_PREFIX}{}",
        Local::now().format(SCREENSHOT_TITLE_TIME_FORMAT)
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl ImageProvider for GyazoClient {
    async fn upload_image(&self, request: &UploadRequest) -> Result<ImageInfo> {
        GyazoClient::upload_image(self, request).await
    }

    fn provider_name(&self) -> &str {
        "gyazo"
    }
}
