//! Paste Value Objects
//!
//! Request and response values for the paste-hosting provider.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{PASTE_DEFAULT_FORMAT, PASTE_FALLBACK_FORMAT, PASTE_FORMAT_TABLE};
use crate::error::Error;

/// Visibility of a paste
///
/// The discriminant is the integer the provider expects in
/// `api_paste_private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastePrivacy {
    /// Indexed and searchable
    Public = 0,
    /// Reachable only through the direct link
    #[default]
    Unlisted = 1,
    /// Requires the owner's session to view
    Private = 2,
}

impl PastePrivacy {
    /// Wire value sent as `api_paste_private`
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name of the privacy level
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for PastePrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PastePrivacy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" | "0" => Ok(Self::Public),
            "unlisted" | "1" => Ok(Self::Unlisted),
            "private" | "2" => Ok(Self::Private),
            other => Err(Error::invalid_argument(format!(
                "Unknown paste privacy '{other}'. Use public, unlisted or private"
            ))),
        }
    }
}

/// Expiration policy of a paste, one of the provider's fixed tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PasteExpiration {
    /// `N`
    #[serde(rename = "N")]
    Never,
    /// `10M`
    #[serde(rename = "10M")]
    TenMinutes,
    /// `1H`
    #[default]
    #[serde(rename = "1H")]
    OneHour,
    /// `1D`
    #[serde(rename = "1D")]
    OneDay,
    /// `1W`
    #[serde(rename = "1W")]
    OneWeek,
    /// `2W`
    #[serde(rename = "2W")]
    TwoWeeks,
    /// `1M`
    #[serde(rename = "1M")]
    OneMonth,
    /// `6M`
    #[serde(rename = "6M")]
    SixMonths,
    /// `1Y`
    #[serde(rename = "1Y")]
    OneYear,
}

impl PasteExpiration {
    /// Every accepted token
    pub const ALL: [Self; 9] = [
        Self::Never,
        Self::TenMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::OneMonth,
        Self::SixMonths,
        Self::OneYear,
    ];

    /// Wire token sent as `api_paste_expire_date`
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Never => "N",
            Self::TenMinutes => "10M",
            Self::OneHour => "1H",
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::TwoWeeks => "2W",
            Self::OneMonth => "1M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
        }
    }
}

impl fmt::Display for PasteExpiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for PasteExpiration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|expiration| expiration.as_token() == token)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown paste expiration '{s}'. Use one of N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y"
                ))
            })
    }
}

/// Value Object: Paste creation request
///
/// Built per call and consumed by the paste provider.
///
/// ## Example
///
/// ```rust
/// use vss_domain::value_objects::{PasteExpiration, PastePrivacy, PasteRequest};
///
/// let request = PasteRequest::new("fn main() {}", "main.rs")
///     .with_privacy(PastePrivacy::Private)
///     .with_expiration(PasteExpiration::OneDay)
///     .with_format("rust");
/// assert_eq!(request.privacy.code(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteRequest {
    /// Text to publish
    pub content: String,
    /// Visibility of the paste
    pub privacy: PastePrivacy,
    /// Lifetime of the paste
    pub expiration: PasteExpiration,
    /// Paste title
    pub title: String,
    /// Syntax highlighting identifier
    pub format: String,
}

impl PasteRequest {
    /// Create a request with the default privacy, expiration and format
    pub fn new<C: Into<String>, T: Into<String>>(content: C, title: T) -> Self {
        Self {
            content: content.into(),
            privacy: PastePrivacy::default(),
            expiration: PasteExpiration::default(),
            title: title.into(),
            format: PASTE_DEFAULT_FORMAT.to_string(),
        }
    }

    /// Set the privacy level
    pub fn with_privacy(mut self, privacy: PastePrivacy) -> Self {
        self.privacy = privacy;
        self
    }

    /// Set the expiration policy
    pub fn with_expiration(mut self, expiration: PasteExpiration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Set the syntax highlighting format
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = format.into();
        self
    }
}

/// Value Object: Created paste
///
/// The provider answers with a bare URL, so everything here is derived
/// from that string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResponse {
    /// Public URL of the paste, exactly as returned
    pub url: String,
    /// Last path segment of the URL
    pub key: String,
    /// When this response was built
    pub created_at: DateTime<Utc>,
}

impl PasteResponse {
    /// Build a response from the URL the provider returned
    pub fn from_url<S: Into<String>>(url: S) -> Self {
        let url = url.into();
        let key = url.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            url,
            key,
            created_at: Utc::now(),
        }
    }
}

/// Paste syntax format for a file extension (with or without leading dot)
///
/// Unmapped extensions resolve to `text`.
pub fn format_for_extension(extension: &str) -> &'static str {
    let normalized = extension.trim_start_matches('.').to_lowercase();
    PASTE_FORMAT_TABLE
        .iter()
        .find(|(ext, _)| *ext == normalized)
        .map_or(PASTE_FALLBACK_FORMAT, |(_, format)| *format)
}
