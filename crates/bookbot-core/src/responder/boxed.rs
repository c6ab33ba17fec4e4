//! BoxResponder -- object-safe dynamic dispatch wrapper for Responder.
//!
//! 1. Define an object-safe `ResponderDyn` trait with boxed futures
//! 2. Blanket-impl `ResponderDyn` for all `T: Responder`
//! 3. `BoxResponder` wraps `Box<dyn ResponderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use bookbot_types::chat::Transcript;
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;

use super::strategy::Responder;

/// Object-safe version of [`Responder`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn ResponderDyn`).
/// A blanket implementation is provided for all types implementing
/// `Responder`.
pub trait ResponderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn respond_boxed<'a>(
        &'a self,
        transcript: &'a Transcript,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteError>> + Send + 'a>>;
}

/// Blanket implementation: any `Responder` automatically implements `ResponderDyn`.
impl<T: Responder> ResponderDyn for T {
    fn name(&self) -> &str {
        Responder::name(self)
    }

    fn respond_boxed<'a>(
        &'a self,
        transcript: &'a Transcript,
        request: &'a GenerateRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteError>> + Send + 'a>> {
        Box::pin(self.respond(transcript, request))
    }
}

/// Type-erased responder for runtime strategy selection.
///
/// Since `Responder` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxResponder` provides equivalent methods that delegate to
/// the inner `ResponderDyn` trait object.
pub struct BoxResponder {
    inner: Box<dyn ResponderDyn + Send + Sync>,
}

impl BoxResponder {
    /// Wrap a concrete `Responder` in a type-erased box.
    pub fn new<T: Responder + 'static>(responder: T) -> Self {
        Self {
            inner: Box::new(responder),
        }
    }

    /// Human-readable strategy name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Produce a reply for the given request against the transcript so far.
    pub async fn respond(
        &self,
        transcript: &Transcript,
        request: &GenerateRequest,
    ) -> Result<String, RemoteError> {
        self.inner.respond_boxed(transcript, request).await
    }
}
