//! The tagged generation request passed alongside the transcript.
//!
//! The request variant tells a responder what kind of reply is wanted,
//! instead of having responders infer it from literal marker strings in
//! the transcript content.

use serde::{Deserialize, Serialize};

use crate::session::PreferenceProfile;

/// What the response generator is being asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerateRequest {
    /// The session-opening introduction.
    Greeting,
    /// 3-5 book recommendations built from the completed profile.
    Recommendations(PreferenceProfile),
    /// A free-form discussion reply to the transcript so far.
    Discussion,
}

impl GenerateRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateRequest::Greeting => "greeting",
            GenerateRequest::Recommendations(_) => "recommendations",
            GenerateRequest::Discussion => "discussion",
        }
    }
}
