//! JSON Value Extension
//!
//! Key normalization and convenient accessors for provider JSON replies.

use serde_json::{Map, Value};

/// Extension trait for serde_json values with convenient accessor methods
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vss_providers::utils::JsonExt;
///
/// let reply = json!({"access_token": "abc", "scope": null});
/// assert_eq!(reply.opt_str("access_token"), Some("abc"));
/// assert_eq!(reply.opt_str("scope"), None);
/// ```
pub trait JsonExt {
    /// Get optional string (None when absent, null or not a string)
    fn opt_str(&self, key: &str) -> Option<&str>;
}

impl JsonExt for Value {
    #[inline]
    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl JsonExt for Map<String, Value> {
    #[inline]
    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Convert an identifier to snake_case
///
/// Handles camelCase, PascalCase, SCREAMING_SNAKE and acronyms
/// (`permalinkURL` becomes `permalink_url`).
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Rewrite every top-level key of a JSON object to snake_case
///
/// Non-object values are returned unchanged.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), value))
                .collect(),
        ),
        other => other,
    }
}
