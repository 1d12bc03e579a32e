//! HTTP endpoint for the chat advisor.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::ChatCommand;
use crate::domain::chat::{ChatMode, ChatTurn};

/// Longest prompt accepted.
pub const MAX_PROMPT_LENGTH: usize = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub mode: ChatMode,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// POST /api/chat - Ask the advisor; always answers
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return ErrorResponse::bad_request("Prompt cannot be empty")
            .into_response_with(StatusCode::BAD_REQUEST);
    }
    if prompt.chars().count() > MAX_PROMPT_LENGTH {
        return ErrorResponse::bad_request(format!(
            "Prompt must be {} characters or less",
            MAX_PROMPT_LENGTH
        ))
        .into_response_with(StatusCode::BAD_REQUEST);
    }

    let cmd = ChatCommand {
        user_id: state.user_id.clone(),
        prompt: prompt.to_string(),
        history: req.history,
        mode: req.mode,
    };
    let exchange = state.chat.respond(cmd).await;
    (StatusCode::OK, Json(exchange)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults_mode_and_history() {
        let req: ChatRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(req.mode, ChatMode::CheerMeOn);
        assert!(req.history.is_empty());
    }

    #[test]
    fn chat_request_reads_mode_and_history() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"prompt": "next?", "mode": "study_buddy", "history": [{"role": "user", "text": "quiz me"}]}"#,
        )
        .unwrap();
        assert_eq!(req.mode, ChatMode::StudyBuddy);
        assert_eq!(req.history, vec![ChatTurn::user("quiz me")]);
    }
}
