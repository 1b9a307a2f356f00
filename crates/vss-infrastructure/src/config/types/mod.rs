//! Configuration types module

pub mod app;
pub mod logging;
pub mod providers;

// Re-export main types
pub use app::*;
