//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod paths;
mod providers;
mod run;

pub use paths::FilePathsConfig;
pub use providers::{FileProviderConfig, FileProvidersConfig};
pub use run::FileRunConfig;

use dsa_ask_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// What to ask, whom, and how
    pub run: FileRunConfig,
    /// Where questions live
    pub paths: FilePathsConfig,
    /// Per-provider connection and output settings
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let (provider, provider_issues) = self.run.parse_provider();
        issues.extend(provider_issues);
        if let Some(kind) = provider {
            issues.extend(self.run.parse_model(kind).1);
        }
        issues.extend(self.run.validate_temperature());
        issues.extend(self.paths.validate());
        issues.extend(self.providers.validate());

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_ask_domain::{Model, ProviderKind};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[run]
provider = "openai"
question = "two_sum.txt"
model = "gpt-4.1"
temperature = 0.2

[paths]
questions_dir = "problems"

[providers.openai]
api_key_env = "MY_OPENAI_KEY"
output_dir = "out/openai"

[providers.deepseek]
base_url = "http://localhost:9000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.run.parse_provider().0, Some(ProviderKind::OpenAi));
        assert_eq!(config.run.question, "two_sum.txt");
        assert_eq!(config.run.parse_model(ProviderKind::OpenAi).0, Model::Gpt41);
        assert_eq!(config.run.temperature, 0.2);
        assert_eq!(config.paths.questions_dir, "problems");
        assert_eq!(
            config.providers.openai.api_key_env(ProviderKind::OpenAi),
            "MY_OPENAI_KEY"
        );
        assert_eq!(
            config.providers.openai.output_dir(ProviderKind::OpenAi),
            "out/openai"
        );
        assert_eq!(
            config.providers.deepseek.base_url(ProviderKind::DeepSeek),
            "http://localhost:9000"
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[run]
model = "deepseek-chat"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.run.parse_provider().0, Some(ProviderKind::DeepSeek));
        assert_eq!(
            config.run.parse_model(ProviderKind::DeepSeek).0,
            Model::DeepSeekChat
        );
        // Defaults should apply
        assert_eq!(config.run.question, "reorder_list.txt");
        assert_eq!(config.paths.questions_dir, "dsa-questions");
        assert_eq!(
            config.providers.deepseek.output_dir(ProviderKind::DeepSeek),
            "deepSeekConversations"
        );
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.run.provider, "deepseek");
        assert_eq!(config.run.temperature, 0.7);
        assert!(config.run.model.is_none());
        assert!(config.run.instruction.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[run]
provider = "bedrock"
temperature = 5.0

[paths]
questions_dir = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }
}
