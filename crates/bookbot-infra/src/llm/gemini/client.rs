//! GeminiResponder -- concrete [`Responder`] implementation for the Gemini
//! `generateContent` endpoint.
//!
//! Sends one blocking (await-point) POST per invocation, no internal
//! retry. The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use bookbot_core::responder::Responder;
use bookbot_types::chat::Transcript;
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;

use super::prompt;
use super::types::{
    Content, GeminiErrorBody, GeminiRequest, GeminiResponse, GenerationConfig, SafetySetting,
};

/// Returned in place of a reply when a successful response carries no text.
pub const EMPTY_REPLY_APOLOGY: &str = "I'm sorry, I couldn't generate a response.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// Sampling parameters are configuration constants, not per-call knobs.
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const SAFETY_SETTINGS: [SafetySetting; 4] = [
    SafetySetting {
        category: "HARM_CATEGORY_HARASSMENT",
        threshold: "BLOCK_MEDIUM_AND_ABOVE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_HATE_SPEECH",
        threshold: "BLOCK_MEDIUM_AND_ABOVE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        threshold: "BLOCK_MEDIUM_AND_ABOVE",
    },
    SafetySetting {
        category: "HARM_CATEGORY_DANGEROUS_CONTENT",
        threshold: "BLOCK_MEDIUM_AND_ABOVE",
    },
];

/// Gemini remote response strategy.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the request query string. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct GeminiResponder {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiResponder {
    /// Create a new Gemini responder.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// The configured model for this responder.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (proxies, tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, transcript: &Transcript, request: &GenerateRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content::text(prompt::render(transcript, request))],
            system_instruction: Content::text(prompt::SYSTEM_INSTRUCTION),
            safety_settings: SAFETY_SETTINGS.to_vec(),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }

    /// Send a rendered request and extract the generated text.
    async fn send(&self, body: &GeminiRequest) -> Result<String, RemoteError> {
        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorBody>(&error_body)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or(error_body);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

        // A successful response with no text is a soft failure: the caller
        // gets a literal apology string, not an error.
        match parsed.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => {
                debug!("successful response carried no text, substituting apology");
                Ok(EMPTY_REPLY_APOLOGY.to_string())
            }
        }
    }
}

// GeminiResponder intentionally does NOT derive Debug; the SecretString
// field already refuses to print the key, and omitting Debug entirely
// keeps the whole request state out of logs.

impl Responder for GeminiResponder {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn respond(
        &self,
        transcript: &Transcript,
        request: &GenerateRequest,
    ) -> Result<String, RemoteError> {
        let body = self.build_request(transcript, request);
        self.send(&body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbot_types::chat::Turn;
    use bookbot_types::session::PreferenceProfile;

    fn make_responder() -> GeminiResponder {
        GeminiResponder::new(
            SecretString::from("test-key-not-real"),
            "gemini-2.0-flash".to_string(),
        )
    }

    #[test]
    fn test_responder_name_and_model() {
        let responder = make_responder();
        assert_eq!(Responder::name(&responder), "gemini");
        assert_eq!(responder.model(), "gemini-2.0-flash");
    }

    #[test]
    fn test_url_shape() {
        let responder = make_responder();
        assert_eq!(
            responder.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let responder = make_responder().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            responder.url(),
            "http://localhost:8080/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_build_request_greeting() {
        let responder = make_responder();
        let body = responder.build_request(&Transcript::new(), &GenerateRequest::Greeting);

        assert_eq!(body.contents.len(), 1);
        assert!(body.contents[0].parts[0].text.contains("warm greeting"));
        assert_eq!(body.safety_settings.len(), 4);
        assert!((body.generation_config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(body.generation_config.max_output_tokens, 1024);
        assert!(body.system_instruction.parts[0].text.contains("BookBot"));
    }

    #[test]
    fn test_build_request_discussion_renders_turns() {
        let responder = make_responder();
        let mut transcript = Transcript::new();
        transcript.push(Turn::assistant("Here are your books."));
        transcript.push(Turn::user("Tell me about the first one."));

        let body = responder.build_request(&transcript, &GenerateRequest::Discussion);
        let prompt = &body.contents[0].parts[0].text;
        assert!(prompt.starts_with("BookBot: Here are your books."));
        assert!(prompt.ends_with("User: Tell me about the first one."));
    }

    #[test]
    fn test_build_request_recommendations_summarizes_profile() {
        let responder = make_responder();
        let mut profile = PreferenceProfile::new();
        profile.record(1, "B. Romance and Emotions");

        let body = responder.build_request(
            &Transcript::new(),
            &GenerateRequest::Recommendations(profile),
        );
        let prompt = &body.contents[0].parts[0].text;
        assert!(prompt.contains("Question 1: B. Romance and Emotions"));
    }
}
