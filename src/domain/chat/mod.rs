//! Chat module - the advisor's vocabulary.
//!
//! Replies are either from the AI provider or a deterministic canned text;
//! the two are never confused because `ChatResponse` carries its source.

mod exchange;
mod fallback;
mod safety;

pub use exchange::{ChatExchange, ChatMode, ChatResponse, ChatRole, ChatSource, ChatTurn};
pub use fallback::{
    fallback_reply, FallbackReason, NOT_CONFIGURED_REPLY, PROVIDER_FAILED_REPLY, SAFETY_REPLY,
};
pub use safety::needs_support;
