//! External Provider Ports
//!
//! Contracts for the two hosting services. The concrete adapters live in
//! `vss-providers`; callers that only need the core operation can hold an
//! `Arc<dyn PasteProvider>` or `Arc<dyn ImageProvider>`.
//!
//! | Port | Description |
//! |------|-------------|
//! | PasteProvider | Text paste creation |
//! | ImageProvider | Image upload |

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{ImageInfo, PasteRequest, PasteResponse, UploadRequest};

/// Paste Provider Port
///
/// Publishes a text snippet and returns where it can be found.
#[async_trait]
pub trait PasteProvider: Send + Sync {
    /// Create a paste from the request
    async fn create_paste(&self, request: &PasteRequest) -> Result<PasteResponse>;

    /// Short provider identifier used in logs
    fn provider_name(&self) -> &str;
}

/// Image Provider Port
///
/// Uploads a local image file and returns the hosted image metadata.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Upload the image described by the request
    async fn upload_image(&self, request: &UploadRequest) -> Result<ImageInfo>;

    /// Short provider identifier used in logs
    fn provider_name(&self) -> &str;
}
