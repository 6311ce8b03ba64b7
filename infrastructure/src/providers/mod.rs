//! Provider adapters implementing [`LlmGateway`].
//!
//! One adapter per hosted API. Each owns its request shape and response
//! extraction; both share the HTTP client setup and error mapping below.

mod deepseek;
mod openai;

pub use deepseek::DeepSeekGateway;
pub use openai::OpenAiGateway;

use dsa_ask_application::ports::llm_gateway::{GatewayError, LlmGateway};
use dsa_ask_domain::{ProviderConfig, ProviderKind};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("dsa-ask/", env!("CARGO_PKG_VERSION"));

/// Build the gateway for the configured provider.
pub fn build_gateway(config: &ProviderConfig) -> Result<Arc<dyn LlmGateway>, GatewayError> {
    Ok(match config.kind {
        ProviderKind::OpenAi => Arc::new(OpenAiGateway::new(config)?),
        ProviderKind::DeepSeek => Arc::new(DeepSeekGateway::new(config)?),
    })
}

/// Shared HTTP client.
///
/// No request timeout is set: a submission waits until the provider
/// answers or the connection fails.
pub(crate) fn http_client() -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GatewayError::ConnectionError(format!("failed to build HTTP client: {}", e)))
}

/// Bearer header for the credential, built per request so a malformed key
/// fails the submission rather than the setup.
fn bearer(kind: ProviderKind, api_key: &str) -> Result<HeaderValue, GatewayError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
        .map_err(|e| GatewayError::RequestFailed(format!("invalid {} API key: {}", kind, e)))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Send a JSON POST and decode the JSON reply, mapping every failure to a [`GatewayError`].
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    config: &ProviderConfig,
    url: &str,
    body: &B,
) -> Result<R, GatewayError>
where
    B: serde::Serialize + ?Sized,
    R: DeserializeOwned,
{
    let auth = bearer(config.kind, &config.api_key)?;
    debug!("POST {}", url);
    let response = client
        .post(url)
        .header(AUTHORIZATION, auth)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::ConnectionError(format!("failed to read response body: {}", e)))?;

    if !status.is_success() {
        return Err(GatewayError::ApiError {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}
