//! HTTP Gateway Implementation
//!
//! The reqwest-backed implementation of the domain's
//! [`HttpGateway`](vss_domain::ports::HttpGateway) port, plus the client
//! configuration it is built from.
//!
//! ## Contents
//!
//! - `ReqwestHttpGateway` - form and multipart POSTs over a pooled client
//! - `HttpClientConfig` - pooling, timeout and user agent settings
//! - `HttpResponseUtils` - status checks shared by the adapters (re-exported from utils)

pub mod provider;

pub use provider::{HttpClientConfig, ReqwestHttpGateway};
pub use crate::utils::HttpResponseUtils;
