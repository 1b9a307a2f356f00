//! Image Value Objects
//!
//! Upload request and uploaded-image metadata for the image-hosting provider.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{IMAGE_DEFAULT_DESCRIPTION, IMAGE_FALLBACK_CONTENT_TYPE};

/// Value Object: Image upload request
///
/// `description` starts out as the library's default text; clear it with
/// [`UploadRequest::without_description`] to omit the `desc` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Image file on the local filesystem
    pub image_path: PathBuf,
    /// Optional title
    pub title: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Optional capture time in unix seconds
    pub timestamp: Option<i64>,
}

impl UploadRequest {
    /// Create a request for the image at `image_path`
    pub fn new<P: Into<PathBuf>>(image_path: P) -> Self {
        Self {
            image_path: image_path.into(),
            title: None,
            description: Some(IMAGE_DEFAULT_DESCRIPTION.to_string()),
            timestamp: None,
        }
    }

    /// Set the title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Drop the description entirely
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Set the capture time in unix seconds
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Value Object: Uploaded image metadata
///
/// Mirrors the provider's JSON reply; field names match the snake_case keys
/// on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Provider-side image identifier
    pub image_id: String,
    /// Page URL for the image
    pub permalink_url: String,
    /// Thumbnail URL
    pub thumb_url: String,
    /// Direct image URL
    pub url: String,
    /// Image format (`png`, `jpg`, ...)
    #[serde(rename = "type")]
    pub image_type: String,
    /// Creation time as an ISO-8601 string
    pub created_at: String,
}

/// Multipart content type for an image path, by extension
pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => IMAGE_FALLBACK_CONTENT_TYPE,
    }
}
