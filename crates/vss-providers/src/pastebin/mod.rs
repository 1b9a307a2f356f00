//! Pastebin Provider
//!
//! Form-encoded paste creation against `https://pastebin.com/api`. The
//! provider answers with a bare URL on success, not JSON.

pub mod client;

pub use client::PastebinClient;
