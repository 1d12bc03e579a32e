//! Chat value types: modes, turns and the tagged response.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Tone the advisor takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMode {
    #[default]
    CheerMeOn,
    HelpMePlan,
    ReflectWithMe,
    StudyBuddy,
}

impl ChatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::CheerMeOn => "cheer_me_on",
            ChatMode::HelpMePlan => "help_me_plan",
            ChatMode::ReflectWithMe => "reflect_with_me",
            ChatMode::StudyBuddy => "study_buddy",
        }
    }

    /// System prompt sent to the AI provider.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            ChatMode::CheerMeOn => {
                "You are a supportive student life coach. Be warm and upbeat, celebrate \
                 small wins, and keep replies under 120 words."
            }
            ChatMode::HelpMePlan => {
                "You are a practical student life coach. Help the student break their day \
                 into two or three concrete, small steps. Keep replies under 120 words."
            }
            ChatMode::ReflectWithMe => {
                "You are a calm student life coach. Reflect back what you hear and ask one \
                 gentle follow-up question. Keep replies under 120 words."
            }
            ChatMode::StudyBuddy => {
                "You are a friendly study buddy. Suggest one focused study technique that \
                 fits what the student says. Keep replies under 120 words."
            }
        }
    }

    /// Mode-specific line appended to canned replies.
    pub fn fallback_tip(&self) -> &'static str {
        match self {
            ChatMode::CheerMeOn => "You showed up today, and that already counts.",
            ChatMode::HelpMePlan => "Try picking one small task and giving it 15 minutes.",
            ChatMode::ReflectWithMe => "What is one thing that went better than expected today?",
            ChatMode::StudyBuddy => "Pick one topic, set a 25-minute timer, and start.",
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cheer_me_on" => Ok(ChatMode::CheerMeOn),
            "help_me_plan" => Ok(ChatMode::HelpMePlan),
            "reflect_with_me" => Ok(ChatMode::ReflectWithMe),
            "study_buddy" => Ok(ChatMode::StudyBuddy),
            other => Err(ValidationError::invalid_format(
                "mode",
                format!("unknown chat mode '{}'", other),
            )),
        }
    }
}

/// Who said a line in the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One earlier line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSource {
    Ai,
    Fallback,
}

impl ChatSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSource::Ai => "ai",
            ChatSource::Fallback => "fallback",
        }
    }
}

/// Advisor reply, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "text", rename_all = "lowercase")]
pub enum ChatResponse {
    Ai(String),
    Fallback(String),
}

impl ChatResponse {
    pub fn source(&self) -> ChatSource {
        match self {
            ChatResponse::Ai(_) => ChatSource::Ai,
            ChatResponse::Fallback(_) => ChatSource::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ChatResponse::Ai(text) | ChatResponse::Fallback(text) => text,
        }
    }
}

/// A prompt and the reply it got. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub prompt: String,
    pub mode: ChatMode,
    pub response: ChatResponse,
}
