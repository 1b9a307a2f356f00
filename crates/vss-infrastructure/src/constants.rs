//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `vss_domain::constants`, and
//! provider endpoints in `vss_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vss.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vss";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VSS";

/// Separator between nested keys in environment variables
///
/// Field names contain single underscores (`api_key`), so nesting uses a
/// double one: `VSS_PASTEBIN__API_KEY`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Keys whose environment values are kept verbatim
///
/// Credentials are opaque strings; without this an all-digit API key set
/// through the environment would be parsed as a number.
pub const CONFIG_VERBATIM_ENV_KEYS: &[&str] = &[
    "pastebin.api_key",
    "gyazo.access_token",
    "gyazo.client_id",
    "gyazo.client_secret",
];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "VSS_LOG";
