//! Configuration management
//!
//! Layered configuration for both hosting services: built-in defaults, an
//! optional TOML file, then `VSS_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, GyazoConfig, LoggingConfig, PastebinConfig};
