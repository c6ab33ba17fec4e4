//! Response strategies.
//!
//! Online (remote model) and offline (static table) replies are two
//! implementations of the one [`Responder`] capability, selected at
//! runtime by the response generator.

pub mod boxed;
pub mod offline;
pub mod strategy;
pub mod table;

pub use boxed::BoxResponder;
pub use offline::OfflineResponder;
pub use strategy::Responder;
