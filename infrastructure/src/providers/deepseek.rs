//! DeepSeek Chat Completions adapter.
//!
//! `POST {base_url}/chat/completions`, OpenAI-compatible. Reasoning models
//! (`deepseek-reasoner`) return their chain of thought in
//! `message.reasoning_content`, separate from the answer.

use super::{http_client, post_json};
use async_trait::async_trait;
use dsa_ask_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use dsa_ask_domain::{ModelResponse, ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};

pub struct DeepSeekGateway {
    client: reqwest::Client,
    config: ProviderConfig,
    endpoint: String,
}

impl DeepSeekGateway {
    pub fn new(config: &ProviderConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http_client()?,
            config: config.clone(),
            endpoint: format!("{}/chat/completions", config.base_url),
        })
    }
}

#[async_trait]
impl LlmGateway for DeepSeekGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::DeepSeek
    }

    async fn submit(&self, request: &ChatRequest) -> Result<ModelResponse, GatewayError> {
        let body = CompletionRequest::from_request(request);
        let parsed: CompletionResponse = post_json(&self.client, &self.config, &self.endpoint, &body).await?;
        parsed.into_model_response()
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    stream: bool,
}

impl<'a> CompletionRequest<'a> {
    fn from_request(request: &'a ChatRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
            stream: false,
        }
    }
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
    reasoning_content: Option<String>,
}

impl CompletionResponse {
    fn into_model_response(self) -> Result<ModelResponse, GatewayError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("response contained no choices".into()))?;

        Ok(ModelResponse::new(choice.message.content.unwrap_or_default())
            .with_reasoning(choice.message.reasoning_content)
            .with_response_id(self.id)
            .with_model_used(self.model))
    }
}
