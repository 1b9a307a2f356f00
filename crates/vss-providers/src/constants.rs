//! Provider Constants
//!
//! Endpoints and wire field names of the hosting services. Domain-level
//! vocabulary (format table, default description) lives in
//! `vss_domain::constants`.

// ============================================================================
// PASTEBIN CONSTANTS
// ============================================================================

/// Default Pastebin API base URL
pub const PASTEBIN_DEFAULT_BASE_URL: &str = "https://pastebin.com/api";

/// Paste creation endpoint, relative to the base URL
pub const PASTEBIN_POST_ENDPOINT: &str = "/api_post.php";

/// Value of `api_option` for paste creation
pub const PASTEBIN_OPTION_PASTE: &str = "paste";

/// Form field carrying the developer key
pub const PASTEBIN_FIELD_DEV_KEY: &str = "api_dev_key";

/// Form field selecting the API operation
pub const PASTEBIN_FIELD_OPTION: &str = "api_option";

/// Form field carrying the paste text
pub const PASTEBIN_FIELD_CODE: &str = "api_paste_code";

/// Form field carrying the privacy code (0, 1 or 2)
pub const PASTEBIN_FIELD_PRIVATE: &str = "api_paste_private";

/// Form field carrying the expiration token
pub const PASTEBIN_FIELD_EXPIRE_DATE: &str = "api_paste_expire_date";

/// Form field carrying the paste title
pub const PASTEBIN_FIELD_NAME: &str = "api_paste_name";

/// Form field carrying the syntax highlighting format
pub const PASTEBIN_FIELD_FORMAT: &str = "api_paste_format";

// ============================================================================
// GYAZO CONSTANTS
// ============================================================================

/// Default Gyazo upload API base URL
pub const GYAZO_DEFAULT_BASE_URL: &str = "https://upload.gyazo.com/api";

/// Upload endpoint, relative to the base URL
pub const GYAZO_UPLOAD_ENDPOINT: &str = "/upload";

/// Default Gyazo OAuth API base URL
pub const GYAZO_DEFAULT_AUTH_URL: &str = "https://api.gyazo.com/api";

/// Token endpoint, relative to the OAuth base URL
pub const GYAZO_TOKEN_ENDPOINT: &str = "/token";

/// Grant type sent to the token endpoint
pub const GYAZO_GRANT_TYPE: &str = "client_credentials";

/// Redirect URI registered for the client credentials flow
pub const GYAZO_REDIRECT_URI: &str = "http://localhost";

/// Multipart field carrying the access token
pub const GYAZO_FIELD_ACCESS_TOKEN: &str = "access_token";

/// Multipart file part holding the image bytes
pub const GYAZO_FIELD_IMAGE_DATA: &str = "imagedata";

/// Optional multipart field for the image title
pub const GYAZO_FIELD_TITLE: &str = "title";

/// Optional multipart field for the image description
pub const GYAZO_FIELD_DESC: &str = "desc";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Default request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
