//! Customer service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CUSTOMER_SERVICE_URL` - Base URL of the customer service (e.g., `https://customers.internal`)
//! - `CUSTOMER_SERVICE_USER` - Basic-auth username
//! - `CUSTOMER_SERVICE_PASSWORD` - Basic-auth password

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const URL_VAR: &str = "CUSTOMER_SERVICE_URL";
const USER_VAR: &str = "CUSTOMER_SERVICE_USER";
const PASSWORD_VAR: &str = "CUSTOMER_SERVICE_PASSWORD";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the customer service.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct CustomerServiceConfig {
    /// Base URL; request paths are appended to it
    pub base_url: Url,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: SecretString,
}

impl std::fmt::Debug for CustomerServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl CustomerServiceConfig {
    /// Build a configuration from already-known values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL is not an absolute
    /// http(s) URL or the username is empty.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                USER_VAR.to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: parse_base_url(base_url)?,
            username,
            password,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let base_url = required(URL_VAR)?;
        let username = required(USER_VAR)?;
        let password = required(PASSWORD_VAR)?;

        if let Some(pattern) = placeholder_pattern(&password) {
            tracing::warn!("{PASSWORD_VAR} appears to be a placeholder (contains '{pattern}')");
        }

        Self::new(&base_url, username, SecretString::from(password))
    }

    /// Returns the basic-auth password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse and validate the service base URL.
fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(URL_VAR.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            URL_VAR.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            URL_VAR.to_string(),
            "must be a hierarchical URL".to_string(),
        ));
    }

    Ok(url)
}

/// Returns the first placeholder pattern found in a secret, if any.
fn placeholder_pattern(secret: &str) -> Option<&'static str> {
    let lower = secret.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
}
