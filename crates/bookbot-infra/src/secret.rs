//! Environment credential resolution.
//!
//! The API key comes from an environment variable and is wrapped in
//! [`SecretString`] so it never appears in Debug output or logs. Absence
//! of the credential is a constructor-time [`ConfigError`], not a per-call
//! failure: the caller starts the session permanently offline.

use secrecy::SecretString;

use bookbot_types::error::ConfigError;

/// Resolve the API key from the named environment variable.
///
/// Empty or whitespace-only values count as missing.
pub fn resolve_api_key(var: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingApiKey(var.to_string())),
    }
}
