//! # Visual State Sharer - Domain Layer
//!
//! Value objects, ports and the error type shared by every other crate in
//! the workspace. Nothing here performs I/O.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`value_objects`] | Paste and image request/response values |
//! | [`ports`] | `HttpGateway`, `PasteProvider`, `ImageProvider` |
//! | [`constants`] | Provider wire vocabulary |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{HttpGateway, HttpResponse, ImageProvider, MultipartPart, PasteProvider};
pub use value_objects::{
    ImageInfo, PasteExpiration, PastePrivacy, PasteRequest, PasteResponse, UploadRequest,
};
