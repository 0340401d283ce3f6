// crates/core/src/ai_client.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Abstract AI/LLM client for chat completions.
///
/// Implementations can use Groq, OpenAI, a local server, or a scripted
/// fake in tests. One handle is shared by every agent of a process.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send a chat completion request and wait for the whole response.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Send a chat completion request and return the assembled text.
    ///
    /// Clients that support server-sent events override this to stream the
    /// deltas; the default falls back to a single non-streamed call.
    async fn chat_streamed(&self, request: ChatRequest) -> Result<String> {
        self.chat(request).await?.into_text()
    }
}

/// A chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Filled in by the client when left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_format: Option<String>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Value>) -> Self {
        Self {
            model: None,
            messages,
            temperature: None,
            top_p: None,
            max_completion_tokens: None,
            stream: false,
            response_format: None,
            reasoning_format: None,
        }
    }

    /// Single user message, which is how every agent talks to the model.
    pub fn user(prompt: impl Into<String>) -> Self {
        Self::new(vec![json!({"role": "user", "content": prompt.into()})])
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_max_completion_tokens(mut self, tokens: u32) -> Self {
        self.max_completion_tokens = Some(tokens);
        self
    }

    /// Ask the provider for a JSON object instead of free text.
    /// Providers reject JSON mode on streamed requests.
    pub fn json_mode(mut self) -> Self {
        self.response_format = Some(json!({"type": "json_object"}));
        self.stream = false;
        self
    }

    /// Keep reasoning-model chain of thought out of the returned content.
    pub fn hide_reasoning(mut self) -> Self {
        self.reasoning_format = Some("hidden".to_string());
        self
    }
}

/// A chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice.
    pub fn into_text(self) -> Result<String> {
        let choice = self.choices.into_iter().next().context("no choices")?;
        choice.message.content.context("first choice has no content")
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}
