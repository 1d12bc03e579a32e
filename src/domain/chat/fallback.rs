//! Canned advisor replies used when no AI reply is available.

use super::ChatMode;

/// Reply when no AI credential is configured.
pub const NOT_CONFIGURED_REPLY: &str = "I'm listening! (AI features are currently in fallback mode because no API key was found, but I'm here to support you.)";

/// Reply when the provider failed, timed out, or answered with nothing usable.
pub const PROVIDER_FAILED_REPLY: &str =
    "I'm having trouble connecting to my brain right now, but I hear you!";

/// Reply when the prompt trips the safety check.
pub const SAFETY_REPLY: &str = "It sounds like you're going through a tough time. If you need help, please contact a trusted adult or a helpline.";

/// Why the advisor fell back to a canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    ProviderFailed,
    SafetyConcern,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => "not_configured",
            FallbackReason::ProviderFailed => "provider_failed",
            FallbackReason::SafetyConcern => "safety_concern",
        }
    }
}

/// Deterministic canned reply for a mode and reason.
///
/// Safety replies never carry the mode tip.
pub fn fallback_reply(mode: ChatMode, reason: FallbackReason) -> String {
    match reason {
        FallbackReason::SafetyConcern => SAFETY_REPLY.to_string(),
        FallbackReason::NotConfigured => format!("{} {}", NOT_CONFIGURED_REPLY, mode.fallback_tip()),
        FallbackReason::ProviderFailed => format!("{} {}", PROVIDER_FAILED_REPLY, mode.fallback_tip()),
    }
}
