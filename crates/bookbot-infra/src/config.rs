//! Configuration loader for BookBot.
//!
//! Reads `config.toml` from the data directory (`~/.bookbot/` in
//! production) and deserializes it into [`BookBotConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Remote model used when the config file does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable checked for the API credential by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// BookBot configuration, from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookBotConfig {
    /// Remote model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Override the endpoint base URL (proxies, tests).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for BookBotConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: None,
        }
    }
}

/// The default data directory (`~/.bookbot`), falling back to the current
/// directory when no home directory is available.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".bookbot"))
        .unwrap_or_else(|| PathBuf::from(".bookbot"))
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`BookBotConfig::default()`].
/// - Unreadable or unparseable file: logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> BookBotConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return BookBotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return BookBotConfig::default();
        }
    };

    match toml::from_str::<BookBotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            BookBotConfig::default()
        }
    }
}
