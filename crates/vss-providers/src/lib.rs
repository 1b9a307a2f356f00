//! # Visual State Sharer - Provider Implementations
//!
//! Adapters for the two hosting services, each implementing a port defined
//! in `vss-domain`, plus the reqwest-backed HTTP gateway they post through.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Paste | `PasteProvider` | `PastebinClient` |
//! | Image | `ImageProvider` | `GyazoClient` |
//! | Transport | `HttpGateway` | `ReqwestHttpGateway` |
//!
//! ## Usage
//!
//! ```ignore
//! use vss_providers::gyazo::{GyazoAuth, GyazoClient};
//! use vss_providers::http::ReqwestHttpGateway;
//! use vss_providers::pastebin::PastebinClient;
//! ```

// Re-export vss-domain types commonly used with providers
pub use vss_domain::error::{Error, Result};
pub use vss_domain::ports::{HttpGateway, ImageProvider, PasteProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP gateway implementation
pub mod http;

/// Pastebin paste provider
pub mod pastebin;

/// Gyazo image provider and OAuth helper
pub mod gyazo;

pub use gyazo::{GyazoAuth, GyazoClient};
pub use http::{HttpClientConfig, ReqwestHttpGateway};
pub use pastebin::PastebinClient;
