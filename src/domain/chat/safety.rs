//! Keyword check for prompts that need a supportive, non-AI reply.

const UNSAFE_PHRASES: &[&str] = &["hurt myself", "kill myself", "suicide", "end my life"];

/// Single words matched on word boundaries only ("die" but not "diet").
const UNSAFE_WORDS: &[&str] = &["die", "suicidal"];

/// Returns true when the text should bypass the AI provider.
pub fn needs_support(text: &str) -> bool {
    let lower = text.to_lowercase();
    if UNSAFE_PHRASES.iter().any(|p| lower.contains(p)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| UNSAFE_WORDS.contains(&word))
}
