use async_trait::async_trait;
use docsum_common::{AppConfig, DocsumError, Result, ServiceFailureKind};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::llm_trait::CompletionClient;
use crate::types::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TEMPERATURE,
};

/// OpenAI-compatible chat completion client
///
/// One attempt per call: no retries and no local timeout.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl OpenAiClient {
    /// Create new client
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        if api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; completions will fail until it is provided");
        }

        info!("Completion client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            config.llm_model.clone(),
        )
    }

    /// Request body for one instruction
    pub fn build_request(&self, instruction: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(instruction)],
            temperature: TEMPERATURE,
            n: 1,
        }
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DocsumError::external(
                ServiceFailureKind::MissingCredential,
                "OPENAI_API_KEY is not set",
            )
        })?;

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                DocsumError::external(
                    ServiceFailureKind::Network,
                    format!("Failed to send request: {}", e),
                )
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DocsumError::external(
                ServiceFailureKind::Network,
                format!("Failed to read response body: {}", e),
            )
        })?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            DocsumError::external(
                ServiceFailureKind::MalformedResponse,
                format!("Failed to parse response: {}", e),
            )
        })?;

        let content = parsed.first_content().ok_or_else(|| {
            DocsumError::external(
                ServiceFailureKind::MalformedResponse,
                "Response contained no message content",
            )
        })?;

        Ok(content.trim().to_string())
    }
}

/// Map a non-success status to an external service error
fn status_error(status: StatusCode, body: &str) -> DocsumError {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceFailureKind::Authentication,
        StatusCode::TOO_MANY_REQUESTS => ServiceFailureKind::RateLimited,
        _ => ServiceFailureKind::Status,
    };

    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    DocsumError::external(kind, format!("API error {}: {}", status, detail))
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, instruction: &str) -> Result<String> {
        let request = self.build_request(instruction);

        debug!(
            "Sending completion request - Model: {}, Instruction length: {}",
            request.model,
            instruction.len()
        );

        let text = self.send(&request).await?;

        debug!("Received completion - Length: {}", text.len());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
