//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod file;
mod http_response;
mod json;

pub use file::{ensure_dir, ensure_file, file_name_of};
pub use http_response::HttpResponseUtils;
pub use json::{JsonExt, normalize_keys, to_snake_case};
