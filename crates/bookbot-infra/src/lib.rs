//! Infrastructure implementations for BookBot.
//!
//! Concrete implementations of the ports defined in `bookbot-core`:
//! the Gemini remote responder, configuration loading, and environment
//! credential resolution.

pub mod config;
pub mod llm;
pub mod secret;
