//! Conversation state machine and response generation for BookBot.
//!
//! This crate defines the responder capability trait (the "port" that the
//! infrastructure layer implements for the remote model), the offline
//! fallback responder, the mode-selecting response generator, and the
//! conversation state machine that drives a session. It depends only on
//! `bookbot-types` -- never on `bookbot-infra` or any HTTP crate.

pub mod conversation;
pub mod generator;
pub mod responder;
