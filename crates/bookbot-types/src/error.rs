use thiserror::Error;

/// Errors from the remote generation endpoint.
///
/// Any of these flips the session to offline mode for the remainder of the
/// session; none of them reaches the host UI as an error value.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    #[error("remote endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

/// Errors raised at session construction time.
///
/// A missing credential is permanent for the session: the conversation
/// starts in forced-offline mode rather than failing per call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key found in environment variable '{0}'")]
    MissingApiKey(String),
}
