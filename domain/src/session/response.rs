//! Model response value object.

use std::time::Duration;

/// What a provider returned for one request, plus how long it took.
///
/// `reasoning` is only present when the selected model exposes a separate
/// chain-of-thought channel (e.g. `deepseek-reasoner`). An empty reasoning
/// string is normalized to `None` so callers only ever check one thing.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    /// Final answer text.
    pub content: String,
    /// Chain-of-thought text, when the model provides one.
    pub reasoning: Option<String>,
    /// Provider-assigned response id.
    pub response_id: Option<String>,
    /// Model the provider reports having used.
    pub model_used: Option<String>,
    /// Wall-clock time from request start to response receipt.
    pub duration: Duration,
}

impl ModelResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            reasoning: None,
            response_id: None,
            model_used: None,
            duration: Duration::ZERO,
        }
    }

    pub fn with_reasoning(mut self, reasoning: Option<String>) -> Self {
        self.reasoning = reasoning.filter(|r| !r.is_empty());
        self
    }

    pub fn with_response_id(mut self, id: Option<String>) -> Self {
        self.response_id = id;
        self
    }

    pub fn with_model_used(mut self, model: Option<String>) -> Self {
        self.model_used = model;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn has_reasoning(&self) -> bool {
        self.reasoning.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_response_has_no_reasoning() {
        let response = ModelResponse::new("Use two pointers...");
        assert!(!response.has_reasoning());
        assert_eq!(response.content, "Use two pointers...");
    }

    #[test]
    fn test_empty_reasoning_is_absent() {
        let response = ModelResponse::new("answer").with_reasoning(Some(String::new()));
        assert!(response.reasoning.is_none());
    }

    #[test]
    fn test_reasoning_kept_when_present() {
        let response =
            ModelResponse::new("answer").with_reasoning(Some("First, find the middle".into()));
        assert_eq!(response.reasoning.as_deref(), Some("First, find the middle"));
    }
}
