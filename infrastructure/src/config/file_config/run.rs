//! Run configuration from TOML (`[run]` section)

use dsa_ask_application::config::ask_params::DEFAULT_TEMPERATURE;
use dsa_ask_application::AskParams;
use dsa_ask_domain::{ConfigIssue, ConfigIssueCode, Model, ProviderKind};
use serde::{Deserialize, Serialize};

/// Accepted sampling temperature range
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// What to ask and whom
///
/// # Example
///
/// ```toml
/// [run]
/// provider = "deepseek"
/// question = "reorder_list.txt"
/// model = "deepseek-reasoner"   # defaults to the provider's model
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRunConfig {
    /// Provider name: "openai" or "deepseek"
    pub provider: String,
    /// Question filename inside the questions directory
    pub question: String,
    /// Model identifier; the provider default when unset
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Instruction override
    pub instruction: Option<String>,
}

impl Default for FileRunConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default().as_str().to_string(),
            question: "reorder_list.txt".to_string(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            instruction: None,
        }
    }
}

impl FileRunConfig {
    /// Parse the provider name, collecting an error issue when unknown.
    pub fn parse_provider(&self) -> (Option<ProviderKind>, Vec<ConfigIssue>) {
        match self.provider.parse::<ProviderKind>() {
            Ok(kind) => (Some(kind), Vec::new()),
            Err(e) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::UnknownProvider {
                        value: self.provider.clone(),
                    },
                    format!("run.provider: {}", e),
                )],
            ),
        }
    }

    /// Parse the model, falling back to the provider default when unset or empty.
    pub fn parse_model(&self, provider: ProviderKind) -> (Model, Vec<ConfigIssue>) {
        match self.model.as_deref() {
            None => (provider.default_model(), Vec::new()),
            Some(s) if s.trim().is_empty() => (
                provider.default_model(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyModelName {
                        field: "run.model".to_string(),
                    },
                    format!(
                        "run.model: model name cannot be empty, using {}",
                        provider.default_model()
                    ),
                )],
            ),
            Some(s) => (Model::from(s.trim()), Vec::new()),
        }
    }

    pub fn validate_temperature(&self) -> Vec<ConfigIssue> {
        if TEMPERATURE_RANGE.contains(&self.temperature) {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::TemperatureOutOfRange {
                value: self.temperature,
            },
            format!(
                "run.temperature: {} is outside {:?}; the provider may reject the request",
                self.temperature, TEMPERATURE_RANGE
            ),
        )]
    }

    /// Build the application-level request parameters.
    pub fn to_ask_params(&self) -> AskParams {
        let params = AskParams::default().with_temperature(self.temperature);
        match &self.instruction {
            Some(instruction) if !instruction.trim().is_empty() => {
                params.with_instruction(instruction.clone())
            }
            _ => params,
        }
    }
}
