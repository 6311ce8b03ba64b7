//! LLM Gateway port
//!
//! Defines the interface for submitting a prompt to a model provider.

use async_trait::async_trait;
use dsa_ask_domain::{Message, Model, ModelResponse, ProviderKind};
use thiserror::Error;

/// Errors that can occur during a submission
///
/// None of these are retried. The caller records them and moves on.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl GatewayError {
    /// Whether the provider rejected the credential
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, GatewayError::ApiError { status: 401 | 403, .. })
    }
}

/// One submission: the model, the ordered payload and the sampling temperature
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(model: Model, messages: Vec<Message>, temperature: f32) -> Self {
        Self {
            model,
            messages,
            temperature,
        }
    }
}

/// Gateway for LLM communication
///
/// Each implementation owns one provider's request shape and response
/// extraction. Exactly one non-streaming request is issued per call.
/// The returned response's `duration` is left for the caller to fill.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Which provider this gateway talks to
    fn provider(&self) -> ProviderKind;

    /// Send the request and wait for the complete response
    async fn submit(&self, request: &ChatRequest) -> Result<ModelResponse, GatewayError>;
}
