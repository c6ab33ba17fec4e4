//! Offline responder backed by the static recommendation table.
//!
//! A pure function of the tagged request: no network, never fails.

use bookbot_types::chat::Transcript;
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;

use super::strategy::Responder;
use super::table;

/// Greeting used when the session opens in offline mode.
pub const OFFLINE_GREETING: &str = "Hi! I'm BookBot, your AI book companion. I'm currently in offline mode, but I can still help you discover books tailored to your preferences. Let me ask you a few questions to understand your taste better.";

/// Reply to free-text discussion while offline.
pub const OFFLINE_DISCUSSION: &str = "I'm in offline mode right now, but I'm still here to help with book recommendations. Feel free to ask me about any of the books I've suggested!";

const RECOMMENDATION_LEAD_IN: &str =
    "Based on your preferences, here are some book recommendations that you might enjoy:";

const CLOSING_INVITATION: &str = "Would you like to know more about any of these books? Just ask me about the one that interests you the most!";

/// Static-table response strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResponder;

impl OfflineResponder {
    pub fn new() -> Self {
        Self
    }

    /// Produce the offline reply for a request. Pure and infallible.
    pub fn reply(&self, request: &GenerateRequest) -> String {
        match request {
            GenerateRequest::Greeting => OFFLINE_GREETING.to_string(),
            GenerateRequest::Recommendations(profile) => {
                let letter = profile.category_letter().unwrap_or(table::DEFAULT_CATEGORY);
                let recommendations = table::recommendations_for(letter);
                format!(
                    "{RECOMMENDATION_LEAD_IN}\n\n{}\n\n{CLOSING_INVITATION}",
                    recommendations.join("\n\n")
                )
            }
            GenerateRequest::Discussion => OFFLINE_DISCUSSION.to_string(),
        }
    }
}

impl Responder for OfflineResponder {
    fn name(&self) -> &str {
        "offline"
    }

    async fn respond(
        &self,
        _transcript: &Transcript,
        request: &GenerateRequest,
    ) -> Result<String, RemoteError> {
        Ok(self.reply(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbot_types::session::PreferenceProfile;

    #[test]
    fn test_greeting_names_offline_limitation() {
        let reply = OfflineResponder::new().reply(&GenerateRequest::Greeting);
        assert!(reply.contains("offline mode"));
        assert!(reply.contains("BookBot"));
    }

    #[test]
    fn test_recommendations_joined_by_blank_lines() {
        let mut profile = PreferenceProfile::new();
        profile.record(1, "A. Mysteries and Thrillers");
        let reply = OfflineResponder::new().reply(&GenerateRequest::Recommendations(profile));

        let expected_body = table::recommendations_for('A').join("\n\n");
        assert!(reply.contains(&expected_body));
        assert!(reply.starts_with(RECOMMENDATION_LEAD_IN));
        assert!(reply.ends_with(CLOSING_INVITATION));
    }

    #[test]
    fn test_recommendations_default_to_category_c() {
        // No answer recorded at all
        let empty = GenerateRequest::Recommendations(PreferenceProfile::new());
        let reply = OfflineResponder::new().reply(&empty);
        assert!(reply.contains("Dune by Frank Herbert"));

        // Answer with an unknown leading letter
        let mut profile = PreferenceProfile::new();
        profile.record(1, "X. Something unexpected");
        let reply = OfflineResponder::new().reply(&GenerateRequest::Recommendations(profile));
        assert!(reply.contains("Dune by Frank Herbert"));
    }

    #[test]
    fn test_discussion_reply_is_fixed() {
        let reply = OfflineResponder::new().reply(&GenerateRequest::Discussion);
        assert_eq!(reply, OFFLINE_DISCUSSION);
    }

    #[tokio::test]
    async fn test_responder_impl_never_fails() {
        let responder = OfflineResponder::new();
        let reply = responder
            .respond(&Transcript::new(), &GenerateRequest::Discussion)
            .await
            .unwrap();
        assert_eq!(reply, OFFLINE_DISCUSSION);
    }
}
