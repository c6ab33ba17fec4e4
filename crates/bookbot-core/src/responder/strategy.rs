//! Responder trait definition.
//!
//! This is the capability all response strategies implement. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); the [`BoxResponder`]
//! wrapper in `boxed` provides object-safe dynamic dispatch on top.
//!
//! [`BoxResponder`]: super::boxed::BoxResponder

use bookbot_types::chat::Transcript;
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;

/// A strategy that produces the next assistant reply.
///
/// The remote implementation lives in bookbot-infra (`GeminiResponder`);
/// the offline implementation is [`super::offline::OfflineResponder`].
pub trait Responder: Send + Sync {
    /// Human-readable strategy name (e.g., "gemini", "offline").
    fn name(&self) -> &str;

    /// Produce a reply for the given request against the transcript so far.
    ///
    /// The transcript is the question-stripped dialogue; what to do with it
    /// is determined by the tagged request, never inferred from content.
    fn respond(
        &self,
        transcript: &Transcript,
        request: &GenerateRequest,
    ) -> impl std::future::Future<Output = Result<String, RemoteError>> + Send;
}
