//! Mode-selecting response generator.
//!
//! Given the dialogue so far and a tagged request, produces the next
//! assistant reply: through the remote responder while online, or from the
//! offline responder otherwise. Never returns an error to its caller; a
//! remote failure flips the session to offline mode and the same request
//! is answered from the static table.

use tracing::{debug, warn};

use bookbot_types::chat::Transcript;
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;
use bookbot_types::session::Mode;

use crate::responder::{BoxResponder, OfflineResponder};

/// Produces assistant replies, selecting between the remote and offline
/// strategies based on the session mode.
///
/// One generator per conversation: mode and last-error state are
/// session-scoped, never global. A generator built without a remote
/// responder (missing credential) is permanently offline.
pub struct ResponseGenerator {
    remote: Option<BoxResponder>,
    offline: OfflineResponder,
    mode: Mode,
    last_error: Option<RemoteError>,
}

impl ResponseGenerator {
    /// Create a generator. `remote = None` forces permanent offline mode.
    pub fn new(remote: Option<BoxResponder>) -> Self {
        let mode = if remote.is_some() {
            Mode::Online
        } else {
            Mode::Offline
        };
        Self {
            remote,
            offline: OfflineResponder::new(),
            mode,
            last_error: None,
        }
    }

    /// A generator with no remote strategy at all.
    pub fn offline_only() -> Self {
        Self::new(None)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a remote responder was configured at construction.
    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// The error that last forced a mode flip, if any.
    pub fn last_error(&self) -> Option<&RemoteError> {
        self.last_error.as_ref()
    }

    /// Flip between online and offline mode (explicit user action).
    ///
    /// Without a configured remote responder the forced-offline condition
    /// is permanent and the toggle leaves the mode untouched.
    pub fn toggle_mode(&mut self) {
        if self.remote.is_none() {
            warn!("mode toggle ignored: no remote responder configured");
            return;
        }
        self.mode = self.mode.toggled();
        self.last_error = None;
        debug!(mode = %self.mode, "mode toggled");
    }

    /// Produce the next assistant reply. Infallible.
    ///
    /// A remote failure is absorbed here: the error is recorded, the mode
    /// flips to offline for the remainder of the session, and the reply is
    /// produced from the offline path for the same request.
    pub async fn generate(&mut self, transcript: &Transcript, request: &GenerateRequest) -> String {
        if self.mode.is_offline() {
            return self.offline.reply(request);
        }

        let Some(remote) = &self.remote else {
            self.mode = Mode::Offline;
            return self.offline.reply(request);
        };

        match remote.respond(transcript, request).await {
            Ok(text) => {
                debug!(responder = remote.name(), kind = request.kind(), "remote reply");
                text
            }
            Err(err) => {
                warn!(
                    responder = remote.name(),
                    kind = request.kind(),
                    error = %err,
                    "remote call failed, switching to offline mode"
                );
                self.mode = Mode::Offline;
                self.last_error = Some(err);
                self.offline.reply(request)
            }
        }
    }
}
