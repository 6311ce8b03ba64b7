//! Provider identities and settings (provider-neutral, serde-free).
//!
//! A provider is the hosted API a question is sent to. Each one fixes the
//! instruction role, the default model, where credentials come from and
//! where its transcripts are written.

use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::session::entities::Role;

/// The supported model-serving APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    OpenAi,
    #[default]
    DeepSeek,
}

impl ProviderKind {
    /// Config/CLI name of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::DeepSeek => "deepseek",
        }
    }

    /// Human-facing name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::DeepSeek => "DeepSeek",
        }
    }

    /// Role the instruction message is sent under
    pub fn instruction_role(&self) -> Role {
        match self {
            ProviderKind::OpenAi => Role::Developer,
            ProviderKind::DeepSeek => Role::System,
        }
    }

    pub fn default_model(&self) -> Model {
        match self {
            ProviderKind::OpenAi => Model::Gpt41Nano,
            ProviderKind::DeepSeek => Model::DeepSeekReasoner,
        }
    }

    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPEN_AI_API_KEY",
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com",
            ProviderKind::DeepSeek => "https://api.deepseek.com",
        }
    }

    pub fn default_output_dir(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAiConversations",
            ProviderKind::DeepSeek => "deepSeekConversations",
        }
    }

    /// Filename prefix for transcripts written for this provider
    pub fn transcript_prefix(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai_conversation",
            ProviderKind::DeepSeek => "deepseek_conversation",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "open-ai" | "open_ai" => Ok(ProviderKind::OpenAi),
            "deepseek" | "deep-seek" | "deep_seek" => Ok(ProviderKind::DeepSeek),
            _ => Err(DomainError::UnknownProvider(s.to_string())),
        }
    }
}

/// Connection settings for one provider, with the credential already resolved.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// API key; empty when none was configured.
    pub api_key: String,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            kind,
            api_key: api_key.into(),
            base_url: kind.default_base_url().to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
