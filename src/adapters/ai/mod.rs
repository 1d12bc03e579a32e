//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models
//! - `OpenAIProvider` - OpenAI chat models
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::{AiConfig, AiProvider};
use crate::ports::AIProvider;

/// Builds the provider selected by configuration.
///
/// Returns `None` when no API key is configured, which puts the chat
/// advisor in fallback mode.
pub fn provider_from_config(config: &AiConfig) -> Option<Arc<dyn AIProvider>> {
    let provider: Arc<dyn AIProvider> = match config.active_provider()? {
        AiProvider::Gemini => {
            let key = config.gemini_api_key.as_ref()?;
            let mut gemini =
                GeminiConfig::new(key.expose_secret().as_str()).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                gemini = gemini.with_model(model);
            }
            Arc::new(GeminiProvider::new(gemini))
        }
        AiProvider::OpenAI => {
            let key = config.openai_api_key.as_ref()?;
            let mut openai =
                OpenAIConfig::new(key.expose_secret().as_str()).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model);
            }
            Arc::new(OpenAIProvider::new(openai))
        }
    };
    Some(provider)
}
