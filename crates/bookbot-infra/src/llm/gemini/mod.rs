//! Gemini `generateContent` responder.

mod client;
pub mod prompt;
pub mod types;

pub use client::{GeminiResponder, EMPTY_REPLY_APOLOGY};
