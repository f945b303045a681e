//! External collaborators: reply generation and voice output
//!
//! The stores never call these. The chat use case asks the generator for a
//! reply between two store mutations, and hands replies to the voice output
//! when the user asked for speech.

use crate::domain::{PromptTemplate, TherapyApproach};

/// Produces the assistant's reply to one user turn
pub trait ResponseGenerator {
    fn generate(&self, user_text: &str, language: &str) -> anyhow::Result<String>;
}

/// Speaks a reply; returns a confirmation for display
pub trait VoiceOutput {
    fn speak(&self, text: &str, language: &str) -> String;
}

/// Offline generator that answers with a short supportive reply.
///
/// It renders the same prompt a model-backed generator would receive and
/// logs it at debug level.
pub struct SupportiveResponder {
    approach: TherapyApproach,
    template: PromptTemplate,
}

impl SupportiveResponder {
    pub fn new(approach: TherapyApproach, template: PromptTemplate) -> Self {
        SupportiveResponder { approach, template }
    }

    fn opening(user_text: &str) -> &'static str {
        let text = user_text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if has(&["suicide", "kill myself", "end my life", "self-harm"]) {
            "I'm really glad you told me. Please reach out to a local crisis line or emergency services right now; you deserve immediate support from someone who can be there with you."
        } else if has(&["anxious", "anxiety", "panic", "worried", "nervous"]) {
            "It sounds like anxiety is sitting heavily with you right now. Let's slow down together: try a few breaths, in for four counts and out for six."
        } else if has(&["sad", "depressed", "down", "lonely", "empty"]) {
            "I'm sorry you're feeling this low. Thank you for putting it into words; that takes effort."
        } else if has(&["stress", "overwhelmed", "too much", "pressure"]) {
            "That sounds like a lot to carry at once. It might help to pick just one small thing to focus on next."
        } else if has(&["angry", "furious", "frustrated", "annoyed"]) {
            "Feeling angry makes sense when something matters to you. Let's look at what's underneath it."
        } else {
            "Thank you for sharing that with me. I'm here to listen."
        }
    }
}

impl ResponseGenerator for SupportiveResponder {
    fn generate(&self, user_text: &str, language: &str) -> anyhow::Result<String> {
        if user_text.trim().is_empty() {
            anyhow::bail!("nothing to respond to");
        }

        let prompt = self.template.render(self.approach, language, user_text);
        tracing::debug!(%language, "prompt: {}", prompt);

        Ok(format!(
            "{} {}",
            Self::opening(user_text),
            self.approach.technique()
        ))
    }
}

/// Voice output that only describes what it would say
pub struct SimulatedVoice;

impl VoiceOutput for SimulatedVoice {
    fn speak(&self, text: &str, language: &str) -> String {
        let preview: String = text.chars().take(50).collect();
        let ellipsis = if text.chars().count() > 50 { "..." } else { "" };
        format!("🔊 [{}] would speak: '{}{}'", language, preview, ellipsis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder(approach: TherapyApproach) -> SupportiveResponder {
        SupportiveResponder::new(approach, PromptTemplate::builtin())
    }

    #[test]
    fn test_reply_reflects_feeling_and_approach() {
        let reply = responder(TherapyApproach::Cbt)
            .generate("I've been so anxious about work", "en-US")
            .unwrap();
        assert!(reply.contains("anxiety"));
        assert!(reply.contains(TherapyApproach::Cbt.technique()));
    }

    #[test]
    fn test_crisis_language_points_to_help() {
        let reply = responder(TherapyApproach::Supportive)
            .generate("I want to end my life", "en-US")
            .unwrap();
        assert!(reply.contains("crisis line"));
    }

    #[test]
    fn test_generic_reply() {
        let reply = responder(TherapyApproach::Act)
            .generate("Had lunch with a friend", "en-US")
            .unwrap();
        assert!(reply.starts_with("Thank you for sharing"));
    }

    #[test]
    fn test_blank_input_is_an_error() {
        assert!(responder(TherapyApproach::Act).generate("  ", "en-US").is_err());
    }

    #[test]
    fn test_simulated_voice_truncates() {
        let voice = SimulatedVoice;
        let short = voice.speak("Hello there", "en-US");
        assert_eq!(short, "🔊 [en-US] would speak: 'Hello there'");

        let long = voice.speak(&"a".repeat(80), "en-US");
        assert!(long.ends_with("...'"));
        assert!(long.contains(&"a".repeat(50)));
        assert!(!long.contains(&"a".repeat(51)));
    }
}
