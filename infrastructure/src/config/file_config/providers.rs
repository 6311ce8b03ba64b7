//! Provider configuration from TOML (`[providers]` section)

use dsa_ask_domain::{ConfigIssue, ConfigIssueCode, ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for one provider. Unset fields fall back to the provider's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Direct API key (prefer api_key_env)
    pub api_key: Option<String>,
    /// Base URL of the API
    pub base_url: Option<String>,
    /// Directory transcripts and error records are written to
    pub output_dir: Option<String>,
}

impl FileProviderConfig {
    pub fn api_key_env(&self, kind: ProviderKind) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| kind.default_api_key_env().to_string())
    }

    pub fn base_url(&self, kind: ProviderKind) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| kind.default_base_url().to_string())
    }

    pub fn output_dir(&self, kind: ProviderKind) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| kind.default_output_dir().to_string())
    }

    /// Resolve the credential: explicit key, else the named environment
    /// variable, else empty. Called once at startup.
    pub fn resolve_api_key(&self, kind: ProviderKind) -> String {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            debug!("Using api_key from config for {}", kind);
            return key.clone();
        }
        let var = self.api_key_env(kind);
        match std::env::var(&var) {
            Ok(key) => key,
            Err(_) => {
                debug!("{} is not set; requests to {} will be unauthenticated", var, kind);
                String::new()
            }
        }
    }

    /// Build the provider settings with the credential resolved.
    pub fn to_provider_config(&self, kind: ProviderKind) -> ProviderConfig {
        ProviderConfig::new(kind, self.resolve_api_key(kind)).with_base_url(self.base_url(kind))
    }
}

/// All provider sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileProviderConfig,
    pub deepseek: FileProviderConfig,
}

impl FileProvidersConfig {
    pub fn get(&self, kind: ProviderKind) -> &FileProviderConfig {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::DeepSeek => &self.deepseek,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (name, section) in [("openai", &self.openai), ("deepseek", &self.deepseek)] {
            if section.output_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyPath {
                        field: format!("providers.{}.output_dir", name),
                    },
                    format!(
                        "providers.{}.output_dir is empty; files will be written to the working directory",
                        name
                    ),
                ));
            }
        }
        issues
    }
}
