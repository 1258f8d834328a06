use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::message::ChatMessage;

/// Errors from a chat completion round trip.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}: {1}")]
    Http(u16, String),

    #[error("cannot parse response: {0}")]
    Parse(String),

    #[error("response contained no choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Timeout
        } else {
            ChatError::Network(err.to_string())
        }
    }
}

/// Anything that can answer a conversation with one assistant message.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError>;
}

/// Connection and sampling settings for [`DeepSeekClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com".to_string(),
            api_key: String::new(),
            model: "deepseek-chat".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    id: String,
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Model {
    id: String,
}

#[derive(Deserialize)]
struct ModelList {
    data: Vec<Model>,
}

/// HTTP client for a DeepSeek (OpenAI-compatible) chat-completions endpoint.
///
/// One request per call; no retries.
#[derive(Clone)]
pub struct DeepSeekClient {
    http: reqwest::Client,
    settings: ChatSettings,
}

impl DeepSeekClient {
    pub fn new(settings: ChatSettings) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Ids of the models the endpoint offers.
    pub async fn list_models(&self) -> Result<Vec<String>, ChatError> {
        let response = self
            .http
            .get(self.endpoint("/v1/models"))
            .bearer_auth(&self.settings.api_key)
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        let list: ModelList =
            serde_json::from_str(&body).map_err(|e| ChatError::Parse(e.to_string()))?;

        Ok(list.data.into_iter().map(|m| m.id).collect())
    }

    fn endpoint(
        &self,
        path: &str,
    ) -> String {
        format!("{}{path}", self.settings.base_url.trim_end_matches('/'))
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String, ChatError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "chat API returned an error");
            return Err(ChatError::Http(status.as_u16(), body));
        }

        Ok(body)
    }
}

#[async_trait]
impl ChatClient for DeepSeekClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let payload = ChatCompletionRequest {
            model: &self.settings.model,
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!(
            model = %self.settings.model,
            messages = messages.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.endpoint("/v1/chat/completions"))
            .bearer_auth(&self.settings.api_key)
            .json(&payload)
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ChatError::Parse(e.to_string()))?;

        debug!(id = %parsed.id, choices = parsed.choices.len(), "chat completion received");

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }
}
