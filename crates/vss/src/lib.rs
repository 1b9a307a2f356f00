//! # Visual State Sharer
//!
//! Share source code on Pastebin and screenshots on Gyazo.
//!
//! This crate is the public face of the workspace: it re-exports the
//! layers underneath and hosts the `vss` command-line front end.
//!
//! ## Example
//!
//! ```no_run
//! use vss::infrastructure::{ClientFactory, ConfigLoader};
//! use vss::{PasteExpiration, PastePrivacy};
//!
//! async fn share() -> vss::Result<()> {
//!     let config = ConfigLoader::new().load()?;
//!     let factory = ClientFactory::new(&config)?;
//!     let paste = factory
//!         .pastebin()
//!         .share_file("src/main.rs", PastePrivacy::Unlisted, PasteExpiration::OneDay)
//!         .await?;
//!     println!("{}", paste.url);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, ports and the error type
//! - `providers` - Pastebin and Gyazo adapters over a reqwest gateway
//! - `infrastructure` - Configuration, logging and client wiring
//! - `cli` - Argument parsing and command dispatch for the binary

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use vss_domain::*;
}

/// Provider layer - Pastebin, Gyazo and the HTTP gateway
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use vss_providers::*;
}

/// Infrastructure layer - configuration, logging and client factory
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use vss_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the concrete clients for convenience
pub use providers::{GyazoAuth, GyazoClient, PastebinClient};
