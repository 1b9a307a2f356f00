//! Domain Value Objects
//!
//! Immutable values created per call and discarded after use. They carry no
//! identity beyond equality of their fields.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PasteRequest`] | Text paste to create |
//! | [`PasteResponse`] | URL and key of a created paste |
//! | [`UploadRequest`] | Local image plus metadata to upload |
//! | [`ImageInfo`] | Metadata of an uploaded image |

/// Image upload value objects
pub mod image;
/// Paste value objects
pub mod paste;

// Re-export commonly used value objects
pub use image::{ImageInfo, UploadRequest, content_type_for_path};
pub use paste::{
    PasteExpiration, PastePrivacy, PasteRequest, PasteResponse, format_for_extension,
};
