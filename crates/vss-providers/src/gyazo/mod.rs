//! Gyazo Provider
//!
//! Multipart image uploads to `https://upload.gyazo.com/api` and the OAuth
//! client-credentials helper that produces the access token they need.

pub mod auth;
pub mod client;

pub use auth::GyazoAuth;
pub use client::{GyazoClient, screenshot_title};
