//! Domain layer constants
//!
//! Wire-level vocabulary shared by the paste and image adapters. Endpoint
//! paths and base URLs live in `vss_providers::constants`.

// ============================================================================
// PASTE DOMAIN CONSTANTS
// ============================================================================

/// Prefix the paste provider uses for semantic failures (sent with HTTP 200)
pub const PASTE_BAD_REQUEST_PREFIX: &str = "Bad API request";

/// Expiration token used when none is given
pub const PASTE_DEFAULT_EXPIRATION: &str = "1H";

/// Syntax format used by a bare `PasteRequest`
pub const PASTE_DEFAULT_FORMAT: &str = "csharp";

/// Syntax format for extensions missing from the lookup table
pub const PASTE_FALLBACK_FORMAT: &str = "text";

/// Extensions shared by `share_directory` when the caller gives none
pub const PASTE_DEFAULT_DIRECTORY_EXTENSIONS: &[&str] = &[".cs", ".csproj", ".json"];

/// Extension (without dot, lowercase) to paste syntax format
pub const PASTE_FORMAT_TABLE: &[(&str, &str)] = &[
    ("cs", "csharp"),
    ("js", "javascript"),
    ("py", "python"),
    ("json", "json"),
    ("xml", "xml"),
    ("html", "html"),
];

// ============================================================================
// IMAGE DOMAIN CONSTANTS
// ============================================================================

/// Description attached to uploads that do not specify one
pub const IMAGE_DEFAULT_DESCRIPTION: &str = "Uploaded via VisualStateSharer";

/// Content type used for unknown image extensions
pub const IMAGE_FALLBACK_CONTENT_TYPE: &str = "image/png";

/// Title prefix for screenshot uploads
pub const SCREENSHOT_TITLE_PREFIX: &str = "Screenshot - ";

/// chrono format for the screenshot title timestamp
pub const SCREENSHOT_TITLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
