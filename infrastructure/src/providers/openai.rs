//! OpenAI Responses API adapter.
//!
//! `POST {base_url}/v1/responses` with the payload under `input`. The
//! answer is spread across `output[]` message items; reasoning models may
//! add `reasoning` items whose summaries are captured separately.

use super::{http_client, post_json};
use async_trait::async_trait;
use dsa_ask_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use dsa_ask_domain::{ModelResponse, ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};

pub struct OpenAiGateway {
    client: reqwest::Client,
    config: ProviderConfig,
    endpoint: String,
}

impl OpenAiGateway {
    pub fn new(config: &ProviderConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http_client()?,
            config: config.clone(),
            endpoint: format!("{}/v1/responses", config.base_url),
        })
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn submit(&self, request: &ChatRequest) -> Result<ModelResponse, GatewayError> {
        let body = ResponsesRequest::from_request(request);
        let parsed: ResponsesBody = post_json(&self.client, &self.config, &self.endpoint, &body).await?;
        parsed.into_model_response()
    }
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<InputItem<'a>>,
    temperature: f32,
    store: bool,
}

impl<'a> ResponsesRequest<'a> {
    fn from_request(request: &'a ChatRequest) -> Self {
        Self {
            model: request.model.as_str(),
            input: request
                .messages
                .iter()
                .map(|m| InputItem {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
            store: true,
        }
    }
}

#[derive(Serialize)]
struct InputItem<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesBody {
    id: Option<String>,
    model: Option<String>,
    /// Convenience aggregate some deployments include
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    Reasoning {
        #[serde(default)]
        summary: Vec<SummaryPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    OutputText {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct SummaryPart {
    text: String,
}

impl ResponsesBody {
    fn into_model_response(self) -> Result<ModelResponse, GatewayError> {
        let mut texts = Vec::new();
        let mut summaries = Vec::new();
        let mut saw_message = false;

        for item in self.output {
            match item {
                OutputItem::Message { content } => {
                    saw_message = true;
                    texts.extend(content.into_iter().filter_map(|part| match part {
                        ContentPart::OutputText { text } => Some(text),
                        ContentPart::Other => None,
                    }));
                }
                OutputItem::Reasoning { summary } => {
                    summaries.extend(summary.into_iter().map(|s| s.text));
                }
                OutputItem::Other => {}
            }
        }

        let content = match self.output_text {
            Some(text) => text,
            None if saw_message => texts.concat(),
            None => {
                return Err(GatewayError::InvalidResponse(
                    "response contained no message output".into(),
                ));
            }
        };

        let reasoning = (!summaries.is_empty()).then(|| summaries.join("\n\n"));

        Ok(ModelResponse::new(content)
            .with_reasoning(reasoning)
            .with_response_id(self.id)
            .with_model_used(self.model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsa_ask_domain::{Message, Model};
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> ChatRequest {
        ChatRequest::new(
            Model::Gpt41Nano,
            vec![
                Message::developer("Solve the following DSA problem."),
                Message::user("Reorder a singly linked list..."),
            ],
            0.7,
        )
    }

    fn gateway(server: &MockServer) -> OpenAiGateway {
        let config = ProviderConfig::new(ProviderKind::OpenAi, "sk-test")
            .with_base_url(server.base_url());
        OpenAiGateway::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_request_shape_and_answer_extraction() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/responses")
                    .header("authorization", "Bearer sk-test")
                    .json_body(json!({
                        "model": "gpt-4.1-nano",
                        "input": [
                            {"role": "developer", "content": "Solve the following DSA problem."},
                            {"role": "user", "content": "Reorder a singly linked list..."}
                        ],
                        "temperature": 0.7,
                        "store": true
                    }));
                then.status(200).json_body(json!({
                    "id": "resp_abc",
                    "object": "response",
                    "model": "gpt-4.1-nano-2025-04-14",
                    "output": [{
                        "type": "message",
                        "id": "msg_1",
                        "role": "assistant",
                        "content": [
                            {"type": "output_text", "text": "Use two pointers", "annotations": []},
                            {"type": "output_text", "text": "...", "annotations": []}
                        ]
                    }]
                }));
            })
            .await;

        let response = gateway(&server).submit(&request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "Use two pointers...");
        assert!(response.reasoning.is_none());
        assert_eq!(response.response_id.as_deref(), Some("resp_abc"));
        assert_eq!(response.model_used.as_deref(), Some("gpt-4.1-nano-2025-04-14"));
    }

    #[tokio::test]
    async fn test_reasoning_summaries_are_captured() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/responses");
                then.status(200).json_body(json!({
                    "id": "resp_r",
                    "model": "o3-mini",
                    "output": [
                        {"type": "reasoning", "id": "rs_1", "summary": [
                            {"type": "summary_text", "text": "Split the list."},
                            {"type": "summary_text", "text": "Reverse the back half."}
                        ]},
                        {"type": "message", "content": [{"type": "output_text", "text": "Merge alternately."}]}
                    ]
                }));
            })
            .await;

        let response = gateway(&server).submit(&request()).await.unwrap();
        assert_eq!(response.content, "Merge alternately.");
        assert_eq!(
            response.reasoning.as_deref(),
            Some("Split the list.\n\nReverse the back half.")
        );
    }

    #[tokio::test]
    async fn test_unknown_items_and_parts_are_ignored() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/responses");
                then.status(200).json_body(json!({
                    "output": [
                        {"type": "web_search_call", "id": "ws_1", "status": "completed"},
                        {"type": "message", "content": [
                            {"type": "refusal", "refusal": "no"},
                            {"type": "output_text", "text": "answer"}
                        ]}
                    ]
                }));
            })
            .await;

        let response = gateway(&server).submit(&request()).await.unwrap();
        assert_eq!(response.content, "answer");
        assert!(response.response_id.is_none());
    }

    #[tokio::test]
    async fn test_missing_message_output_is_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/responses");
                then.status(200).json_body(json!({"id": "resp_empty", "output": []}));
            })
            .await;

        let error = gateway(&server).submit(&request()).await.unwrap_err();
        assert!(matches!(error, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_quota_error_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/responses");
                then.status(429).body("You exceeded your current quota");
            })
            .await;

        let error = gateway(&server).submit(&request()).await.unwrap_err();
        match error {
            GatewayError::ApiError { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "You exceeded your current quota");
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }
}
