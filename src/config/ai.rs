//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// Every field is optional. Without an API key the chat advisor runs in
/// fallback mode.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Google Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Preferred AI provider
    #[serde(default = "default_provider")]
    pub provider: AiProvider,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Reply length cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        is_set(self.gemini_api_key.as_ref())
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        is_set(self.openai_api_key.as_ref())
    }

    /// Provider that will serve chat requests.
    ///
    /// The preferred provider wins when its key is set; otherwise whichever
    /// provider has a key. `None` means fallback mode.
    pub fn active_provider(&self) -> Option<AiProvider> {
        let has = |p: AiProvider| match p {
            AiProvider::Gemini => self.has_gemini(),
            AiProvider::OpenAI => self.has_openai(),
        };
        [self.provider, AiProvider::Gemini, AiProvider::OpenAI]
            .into_iter()
            .find(|p| has(*p))
    }

    /// True when some provider has a credential
    pub fn is_configured(&self) -> bool {
        self.active_provider().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            openai_api_key: None,
            provider: default_provider(),
            model: None,
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn is_set(key: Option<&Secret<String>>) -> bool {
    key.is_some_and(|k| !k.expose_secret().trim().is_empty())
}

fn default_provider() -> AiProvider {
    AiProvider::Gemini
}

fn default_timeout() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    512
}
