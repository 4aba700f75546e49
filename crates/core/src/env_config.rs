//! Environment variable parsing with warn-level logging for invalid values.

use crate::{DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SITE_URL};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a non-empty string variable.
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Runtime settings read from `NOTEHUB_*` variables.
#[derive(Clone, PartialEq, Eq)]
pub struct NoteHubConfig {
    /// Base URL of the notes API (`NOTEHUB_API_URL`).
    pub api_url: String,
    /// Bearer token for the notes API (`NOTEHUB_TOKEN`).
    pub token: Option<String>,
    /// Public origin used for canonical URLs (`NOTEHUB_SITE_URL`).
    pub site_url: String,
    /// Outbound request timeout (`NOTEHUB_HTTP_TIMEOUT_SECS`).
    pub http_timeout_secs: u64,
}

impl std::fmt::Debug for NoteHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteHubConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("site_url", &self.site_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

impl Default for NoteHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            token: None,
            site_url: DEFAULT_SITE_URL.to_owned(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl NoteHubConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: env_non_empty("NOTEHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            token: env_non_empty("NOTEHUB_TOKEN"),
            site_url: env_non_empty("NOTEHUB_SITE_URL")
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned()),
            http_timeout_secs: env_parse_with_default(
                "NOTEHUB_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            ),
        }
    }
}
