//! # Cookie Token Reader
//!
//! Parsing of the browser cookie jar string and the CSRF token value type.
//! The jar is passed in as a plain string so this stays testable outside a
//! browser; the wasm layer sources it from `document.cookie`.

use serde::{Deserialize, Serialize};

/// Name of the cookie the backend issues its CSRF token under
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the backend expects the token on for state-changing requests
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Look up a cookie by name in a raw cookie jar string.
///
/// Fragments are split on `;` and trimmed; the first fragment whose prefix
/// is exactly `<name>=` wins, and its remainder is returned percent-decoded.
/// Returns `None` for an empty jar or an absent name. A cookie named
/// `csrftokenX` never matches a lookup for `csrftoken`.
pub fn cookie_value(jar: &str, name: &str) -> Option<String> {
    if jar.is_empty() {
        return None;
    }

    for fragment in jar.split(';') {
        let fragment = fragment.trim();
        if let Some(value) = fragment.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            // decodeURIComponent semantics: %XX escapes only, `+` stays `+`
            let decoded = urlencoding::decode(value)
                .map(|cow| cow.into_owned())
                .unwrap_or_else(|_| value.to_string());
            return Some(decoded);
        }
    }

    None
}

/// A per-session CSRF token, read once from the cookie jar and injected
/// explicitly into every request-issuing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wrap an already-known token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the `csrftoken` cookie from a raw cookie jar string
    pub fn from_jar(jar: &str) -> Option<Self> {
        cookie_value(jar, CSRF_COOKIE_NAME).map(Self)
    }

    /// Header value to send as `X-CSRFToken`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
