//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers.
//!
//! - **gateway** - outbound HTTP POST capability (the leaf the adapters share)
//! - **providers** - paste and image hosting services

/// Outbound HTTP gateway port
pub mod gateway;
/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use gateway::{FormFields, HttpGateway, HttpResponse, MultipartPart, join_url};
pub use providers::{ImageProvider, PasteProvider};
