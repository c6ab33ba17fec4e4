//! Shared domain types for BookBot.
//!
//! This crate contains the core domain types used across the BookBot
//! workspace: conversation turns and transcripts, the session state machine
//! vocabulary, the tagged generation request, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod request;
pub mod session;
