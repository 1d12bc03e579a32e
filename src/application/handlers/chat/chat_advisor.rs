//! ChatAdvisor - answers chat prompts with an AI reply or a canned fallback.
//!
//! `respond` never fails. A missing provider, a provider error, a timeout
//! or an empty reply all produce a deterministic fallback text, and prompts
//! that trip the safety check are answered without calling the provider.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::chat::{
    fallback_reply, needs_support, ChatExchange, ChatMode, ChatResponse, ChatRole, ChatSource,
    ChatTurn, FallbackReason,
};
use crate::domain::foundation::UserId;
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Earlier turns forwarded to the provider.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub user_id: UserId,
    pub prompt: String,
    pub history: Vec<ChatTurn>,
    pub mode: ChatMode,
}

/// Sampling settings for provider calls.
#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            temperature: 0.7,
            max_tokens: 512,
        }
    }
}

pub struct ChatAdvisor {
    provider: Option<Arc<dyn AIProvider>>,
    settings: ChatSettings,
}

impl ChatAdvisor {
    pub fn new(provider: Option<Arc<dyn AIProvider>>, settings: ChatSettings) -> Self {
        Self { provider, settings }
    }

    /// An advisor that always answers with fallback text.
    pub fn fallback_only() -> Self {
        Self::new(None, ChatSettings::default())
    }

    /// Which kind of reply a normal prompt would get.
    pub fn mode(&self) -> ChatSource {
        match self.provider {
            Some(_) => ChatSource::Ai,
            None => ChatSource::Fallback,
        }
    }

    pub async fn respond(&self, cmd: ChatCommand) -> ChatExchange {
        let response = self.reply(&cmd).await;
        ChatExchange {
            prompt: cmd.prompt,
            mode: cmd.mode,
            response,
        }
    }

    async fn reply(&self, cmd: &ChatCommand) -> ChatResponse {
        if needs_support(&cmd.prompt) {
            tracing::warn!(user_id = %cmd.user_id, "chat prompt flagged by safety check");
            return ChatResponse::Fallback(fallback_reply(cmd.mode, FallbackReason::SafetyConcern));
        }

        let Some(provider) = &self.provider else {
            return ChatResponse::Fallback(fallback_reply(cmd.mode, FallbackReason::NotConfigured));
        };

        let request = self.build_request(cmd);
        let trace_id = request.metadata.trace_id.clone();

        match tokio::time::timeout(self.settings.timeout, provider.complete(request)).await {
            Ok(Ok(completion)) if !completion.content.trim().is_empty() => {
                tracing::debug!(
                    trace_id = %trace_id,
                    provider = %provider.provider_info().name,
                    model = %completion.model,
                    finish_reason = ?completion.finish_reason,
                    tokens = completion.usage.total_tokens,
                    "chat reply from provider"
                );
                ChatResponse::Ai(completion.content.trim().to_string())
            }
            Ok(Ok(_)) => {
                tracing::warn!(trace_id = %trace_id, "provider returned an empty reply");
                ChatResponse::Fallback(fallback_reply(cmd.mode, FallbackReason::ProviderFailed))
            }
            Ok(Err(err)) => {
                tracing::warn!(trace_id = %trace_id, error = %err, "chat provider failed");
                ChatResponse::Fallback(fallback_reply(cmd.mode, FallbackReason::ProviderFailed))
            }
            Err(_) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    timeout_secs = self.settings.timeout.as_secs(),
                    "chat provider timed out"
                );
                ChatResponse::Fallback(fallback_reply(cmd.mode, FallbackReason::ProviderFailed))
            }
        }
    }

    fn build_request(&self, cmd: &ChatCommand) -> CompletionRequest {
        let metadata = RequestMetadata::new(cmd.user_id.clone(), uuid::Uuid::new_v4().to_string());
        let skip = cmd.history.len().saturating_sub(MAX_HISTORY_TURNS);

        cmd.history
            .iter()
            .skip(skip)
            .fold(
                CompletionRequest::new(metadata)
                    .with_system_prompt(cmd.mode.system_prompt())
                    .with_temperature(self.settings.temperature)
                    .with_max_tokens(self.settings.max_tokens),
                |request, turn| {
                    let role = match turn.role {
                        ChatRole::User => MessageRole::User,
                        ChatRole::Assistant => MessageRole::Assistant,
                    };
                    request.with_message(role, turn.text.clone())
                },
            )
            .with_message(MessageRole::User, cmd.prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::chat::{NOT_CONFIGURED_REPLY, PROVIDER_FAILED_REPLY, SAFETY_REPLY};

    fn command(prompt: &str) -> ChatCommand {
        ChatCommand {
            user_id: UserId::new("student").unwrap(),
            prompt: prompt.to_string(),
            history: vec![],
            mode: ChatMode::HelpMePlan,
        }
    }

    fn advisor(mock: &MockAIProvider) -> ChatAdvisor {
        ChatAdvisor::new(
            Some(Arc::new(mock.clone())),
            ChatSettings {
                timeout: Duration::from_millis(100),
                ..ChatSettings::default()
            },
        )
    }

    #[tokio::test]
    async fn without_provider_replies_with_fallback() {
        let advisor = ChatAdvisor::fallback_only();
        assert_eq!(advisor.mode(), ChatSource::Fallback);

        let exchange = advisor.respond(command("help me plan my week")).await;

        assert_eq!(exchange.response.source(), ChatSource::Fallback);
        assert!(exchange.response.text().starts_with(NOT_CONFIGURED_REPLY));
        assert_eq!(exchange.prompt, "help me plan my week");
    }

    #[tokio::test]
    async fn fallback_is_deterministic() {
        let advisor = ChatAdvisor::fallback_only();
        let a = advisor.respond(command("hi")).await;
        let b = advisor.respond(command("hi")).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn provider_reply_is_tagged_ai() {
        let mock = MockAIProvider::new().with_response("  Start with your hardest task.  ");
        let exchange = advisor(&mock).respond(command("how do I start?")).await;

        assert_eq!(
            exchange.response,
            ChatResponse::Ai("Start with your hardest task.".to_string())
        );
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn provider_error_falls_back() {
        let mock = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let exchange = advisor(&mock).respond(command("hi")).await;

        assert_eq!(exchange.response.source(), ChatSource::Fallback);
        assert!(exchange.response.text().starts_with(PROVIDER_FAILED_REPLY));
    }

    #[tokio::test]
    async fn empty_reply_falls_back() {
        let mock = MockAIProvider::new().with_response("   ");
        let exchange = advisor(&mock).respond(command("hi")).await;
        assert_eq!(exchange.response.source(), ChatSource::Fallback);
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_fallback() {
        let mock = MockAIProvider::new()
            .with_response("too late")
            .with_delay(Duration::from_millis(500));
        let exchange = advisor(&mock).respond(command("hi")).await;

        assert_eq!(exchange.response.source(), ChatSource::Fallback);
    }

    #[tokio::test]
    async fn safety_prompt_skips_provider() {
        let mock = MockAIProvider::new();
        let exchange = advisor(&mock).respond(command("I want to hurt myself")).await;

        assert_eq!(exchange.response, ChatResponse::Fallback(SAFETY_REPLY.to_string()));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn request_carries_mode_prompt_and_recent_history() {
        let mock = MockAIProvider::new();
        let history: Vec<ChatTurn> = (0..12)
            .map(|i| {
                if i % 2 == 0 {
                    ChatTurn::user(format!("q{}", i))
                } else {
                    ChatTurn::assistant(format!("a{}", i))
                }
            })
            .collect();
        let cmd = ChatCommand {
            history,
            ..command("what next?")
        };

        advisor(&mock).respond(cmd).await;

        let request = &mock.get_calls()[0];
        assert_eq!(
            request.system_prompt.as_deref(),
            Some(ChatMode::HelpMePlan.system_prompt())
        );
        assert_eq!(request.messages.len(), MAX_HISTORY_TURNS + 1);
        assert_eq!(request.messages[0].content, "q2");
        assert_eq!(request.messages[MAX_HISTORY_TURNS].content, "what next?");
    }
}
