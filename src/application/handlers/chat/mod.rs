//! Chat advisor.

mod chat_advisor;

pub use chat_advisor::{ChatAdvisor, ChatCommand, ChatSettings, MAX_HISTORY_TURNS};
