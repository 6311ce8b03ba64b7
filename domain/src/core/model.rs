//! Model value object representing an LLM model

use crate::providers::ProviderKind;

/// Model identifiers accepted by the supported providers (Value Object)
///
/// Known identifiers get their own variant; anything else is kept
/// verbatim in [`Model::Custom`] and passed through to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // DeepSeek models
    DeepSeekChat,
    DeepSeekReasoner,
    // OpenAI models
    Gpt41Nano,
    Gpt41Mini,
    Gpt41,
    Gpt4o,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::DeepSeekChat => "deepseek-chat",
            Model::DeepSeekReasoner => "deepseek-reasoner",
            Model::Gpt41Nano => "gpt-4.1-nano",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt4o => "gpt-4o",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a DeepSeek model
    pub fn is_deepseek(&self) -> bool {
        match self {
            Model::DeepSeekChat | Model::DeepSeekReasoner => true,
            Model::Custom(s) => s.starts_with("deepseek-"),
            _ => false,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt41Nano | Model::Gpt41Mini | Model::Gpt41 | Model::Gpt4o => true,
            Model::Custom(s) => s.starts_with("gpt-") || s.starts_with("o1") || s.starts_with("o3"),
            _ => false,
        }
    }

    /// Infer the provider that serves this model, if the family is recognizable
    pub fn provider_hint(&self) -> Option<ProviderKind> {
        if self.is_deepseek() {
            Some(ProviderKind::DeepSeek)
        } else if self.is_gpt() {
            Some(ProviderKind::OpenAi)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "deepseek-chat" => Model::DeepSeekChat,
            "deepseek-reasoner" => Model::DeepSeekReasoner,
            "gpt-4.1-nano" => Model::Gpt41Nano,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4o" => Model::Gpt4o,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = [
            Model::DeepSeekChat,
            Model::DeepSeekReasoner,
            Model::Gpt41Nano,
            Model::Gpt41,
        ];
        for model in models {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gpt-5-preview".parse().unwrap();
        assert_eq!(model, Model::Custom("gpt-5-preview".to_string()));
        assert_eq!(model.to_string(), "gpt-5-preview");
    }

    #[test]
    fn test_provider_hint() {
        assert_eq!(Model::DeepSeekReasoner.provider_hint(), Some(ProviderKind::DeepSeek));
        assert_eq!(Model::Gpt41Nano.provider_hint(), Some(ProviderKind::OpenAi));
        assert_eq!(Model::from("deepseek-coder").provider_hint(), Some(ProviderKind::DeepSeek));
        assert_eq!(Model::from("llama-3").provider_hint(), None);
    }
}
