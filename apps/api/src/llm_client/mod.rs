//! LLM Client — the single point of entry for all chat-completion calls in CareerPad.
//!
//! ARCHITECTURAL RULE: No other module may call the completion provider directly.
//! All LLM interactions MUST go through this module.
//!
//! One request per call: no retry, no streaming, no multi-turn context.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for every career tree. Hardcoded to keep output shape stable.
pub const MODEL: &str = "deepseek/deepseek-r1-0528:free";
const REFERER: &str = "https://careerpad-09.web.app";
const APP_TITLE: &str = "CareerPad";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    /// Some providers report failures inside a 200 body.
    error: Option<ProviderErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Token accounting. Providers fill this in unevenly, so every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

impl ChatResponse {
    /// Text of the first completion, if it has any non-blank content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// The single LLM client used by the generation service.
/// Wraps an OpenAI-compatible chat-completions endpoint (OpenRouter by default).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    /// `timeout` of `None` leaves reqwest's default in place.
    pub fn new(
        api_key: String,
        endpoint: String,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: api_key.trim().to_string(),
            endpoint,
        })
    }

    /// Length of the configured credential. Logged instead of the key itself.
    pub fn api_key_len(&self) -> usize {
        self.api_key.len()
    }

    /// Makes a single call to the completion endpoint, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(error) = &chat.error {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error.message.clone(),
            });
        }

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}, total_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(chat)
    }

    /// Calls the LLM and returns the first completion's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips a leading ```json (or bare ```) fence and a trailing ``` fence from LLM output.
/// Each marker is removed independently, so a half-fenced payload is still cleaned.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text)
        .trim();
    text.strip_suffix("```").unwrap_or(text).trim()
}
