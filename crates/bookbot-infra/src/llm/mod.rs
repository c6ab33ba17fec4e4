//! Remote model implementations.
//!
//! Contains the concrete [`Responder`] implementation for the Gemini
//! `generateContent` endpoint, and a factory ([`create_responder`]) that
//! builds it from configuration, resolving the API key from the
//! environment.
//!
//! [`Responder`]: bookbot_core::responder::Responder

pub mod gemini;

use bookbot_core::responder::BoxResponder;
use bookbot_types::error::ConfigError;

use crate::config::BookBotConfig;
use crate::secret;

use self::gemini::GeminiResponder;

/// Build the remote responder from configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] when the configured environment
/// variable is unset or blank; the caller then runs permanently offline.
pub fn create_responder(config: &BookBotConfig) -> Result<BoxResponder, ConfigError> {
    let api_key = secret::resolve_api_key(&config.api_key_env)?;
    let mut responder = GeminiResponder::new(api_key, config.model.clone());
    if let Some(base_url) = &config.base_url {
        responder = responder.with_base_url(base_url.clone());
    }
    Ok(BoxResponder::new(responder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_responder_missing_key() {
        let config = BookBotConfig {
            api_key_env: "BOOKBOT_FACTORY_TEST_UNSET".to_string(),
            ..BookBotConfig::default()
        };
        let result = create_responder(&config);
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }

    #[test]
    fn test_create_responder_with_key() {
        // SAFETY: test-local var name, set and removed within this test.
        unsafe { std::env::set_var("BOOKBOT_FACTORY_TEST_KEY", "test-key-not-real") };

        let config = BookBotConfig {
            api_key_env: "BOOKBOT_FACTORY_TEST_KEY".to_string(),
            base_url: Some("http://localhost:9999".to_string()),
            ..BookBotConfig::default()
        };
        let responder = create_responder(&config).unwrap();
        assert_eq!(responder.name(), "gemini");

        // SAFETY: removing the var we just set.
        unsafe { std::env::remove_var("BOOKBOT_FACTORY_TEST_KEY") };
    }
}
