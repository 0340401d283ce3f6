// crates/core/src/groq_client.rs

//! Groq client for the OpenAI-compatible chat completions API.

use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use reqwest_eventsource::{retry, Error as EventSourceError, Event, EventSource};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::ai_client::{AiClient, ChatRequest, ChatResponse};

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";

/// Groq chat completions client.
///
/// Environment variables:
/// - GROQ_API_KEY: your API key (required)
/// - GROQ_ENDPOINT: default "https://api.groq.com"
/// - GROQ_MODEL: default "deepseek-r1-distill-llama-70b"
/// - GROQ_MAX_ATTEMPTS: attempts per call for 429/5xx/network errors, default 3
/// - GROQ_TIMEOUT_SECS: per-request timeout, default 120
pub struct GroqClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_attempts: u32,
    backoff: Duration,
}

impl GroqClient {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Self {
        Self::with_http_client(Client::new(), endpoint, model, api_key)
    }

    fn with_http_client(client: Client, endpoint: &str, model: &str, api_key: &str) -> Self {
        let url = format!(
            "{}/openai/v1/chat/completions",
            endpoint.trim_end_matches('/')
        );

        Self {
            client,
            url,
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").context("GROQ_API_KEY not set")?;
        let endpoint =
            std::env::var("GROQ_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_attempts = env_parse("GROQ_MAX_ATTEMPTS")?.unwrap_or(3);
        let timeout_secs = env_parse("GROQ_TIMEOUT_SECS")?.unwrap_or(120);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        tracing::info!(%model, %endpoint, max_attempts, timeout_secs, "using Groq chat completions");

        Ok(Self::with_http_client(client, &endpoint, &model, &api_key).with_retry(
            max_attempts,
            Duration::from_secs(1),
        ))
    }

    /// Attempts per call (at least one) and the base of the quadratic backoff.
    pub fn with_retry(mut self, max_attempts: u32, backoff: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.backoff = backoff;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fill in the model and log the outgoing body.
    fn prepare(&self, mut request: ChatRequest) -> ChatRequest {
        if request.model.is_none() {
            request.model = Some(self.model.clone());
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(json) = serde_json::to_string(&request) {
                debug!(url = %self.url, body = %truncate(&json, 2000), "groq request");
            }
        }
        request
    }

    fn request_builder(&self, request: &ChatRequest) -> RequestBuilder {
        self.client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
    }

    /// Run `attempt` until it succeeds, fails terminally or the attempt
    /// budget is spent. Sleeps `backoff * n^2` between attempts.
    async fn with_retries<T, F, Fut>(&self, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, AttemptError>>,
    {
        let mut last_error = None;

        for n in 1..=self.max_attempts {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Retryable(e)) => {
                    warn!(
                        attempt = n,
                        max_attempts = self.max_attempts,
                        error = %truncate(&format!("{e:#}"), 500),
                        "groq request failed"
                    );
                    last_error = Some(e);
                }
            }

            if n < self.max_attempts {
                tokio::time::sleep(self.backoff * n * n).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow!("request failed after retries"))
            .context(format!("Groq request failed after {} attempts", self.max_attempts)))
    }

    async fn post_once(&self, request: &ChatRequest) -> std::result::Result<Response, AttemptError> {
        let resp = self
            .request_builder(request)
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(anyhow!("network error: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(AttemptError::from_status(status, &body))
    }

    /// Open an event stream and wait until the provider accepted it.
    async fn open_stream(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<EventSource, AttemptError> {
        let mut source = EventSource::new(self.request_builder(request))
            .map_err(|e| AttemptError::Fatal(anyhow!("cannot stream request: {e:?}")))?;
        source.set_retry_policy(Box::new(retry::Never));

        match source.next().await {
            Some(Ok(Event::Open)) => Ok(source),
            Some(Ok(Event::Message(_))) => Err(AttemptError::Fatal(anyhow!(
                "event stream sent data before opening"
            ))),
            Some(Err(e)) => {
                source.close();
                Err(AttemptError::from_stream_error(e).await)
            }
            None => Err(AttemptError::Retryable(anyhow!(
                "event stream closed before opening"
            ))),
        }
    }
}

/// A failed attempt, sorted by whether another attempt may help.
enum AttemptError {
    /// 429, 5xx or transport failure.
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

impl AttemptError {
    fn from_status(status: StatusCode, body: &str) -> Self {
        if is_retryable(status) {
            AttemptError::Retryable(anyhow!("HTTP {} - {}", status, body))
        } else {
            AttemptError::Fatal(anyhow!("Groq request failed: HTTP {} - {}", status, body))
        }
    }

    async fn from_stream_error(error: EventSourceError) -> Self {
        match error {
            EventSourceError::InvalidStatusCode(status, resp) => {
                let body = resp.text().await.unwrap_or_default();
                Self::from_status(status, &body)
            }
            EventSourceError::Transport(e) => AttemptError::Retryable(anyhow!("network error: {e}")),
            other => AttemptError::Fatal(anyhow!("failed to open event stream: {other}")),
        }
    }
}

#[async_trait]
impl AiClient for GroqClient {
    async fn chat(&self, mut request: ChatRequest) -> Result<ChatResponse> {
        request.stream = false;
        let request = self.prepare(request);
        let resp = self.with_retries(|| self.post_once(&request)).await?;
        let raw_text = resp.text().await.context("failed to read response body")?;

        debug!(body = %truncate(&raw_text, 500), "groq response");

        serde_json::from_str(&raw_text).context("failed to parse Groq response")
    }

    /// Streams the deltas and only succeeds once the provider sent `[DONE]`.
    /// Errors after the stream opened are not retried.
    async fn chat_streamed(&self, mut request: ChatRequest) -> Result<String> {
        request.stream = true;
        request.response_format = None;
        let request = self.prepare(request);
        let mut source = self.with_retries(|| self.open_stream(&request)).await?;

        let mut text = String::new();
        while let Some(event) = source.next().await {
            match event {
                Ok(Event::Open) => {}
                Ok(Event::Message(message)) => {
                    if apply_stream_data(&mut text, &message.data)? {
                        source.close();
                        debug!(chars = text.len(), "groq stream complete");
                        return Ok(text);
                    }
                }
                Err(EventSourceError::StreamEnded) => break,
                Err(e) => {
                    source.close();
                    bail!("Groq stream failed after {} chars: {e}", text.len());
                }
            }
        }

        bail!(
            "Groq stream ended without [DONE] after {} chars",
            text.len()
        )
    }
}

/// Fold one `data:` payload into `text`. Returns true on `[DONE]`.
fn apply_stream_data(text: &mut String, data: &str) -> Result<bool> {
    if data.trim() == "[DONE]" {
        return Ok(true);
    }

    let chunk: StreamChunk = serde_json::from_str(data).context("failed to parse stream chunk")?;
    if let Some(error) = chunk.error {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| error.to_string());
        bail!("Groq stream error: {message}");
    }

    for choice in chunk.choices {
        if let Some(content) = choice.delta.content {
            text.push_str(&content);
        }
        if choice.finish_reason.as_deref() == Some("length") {
            warn!(chars = text.len(), "groq output hit the completion token limit");
        }
    }
    Ok(false)
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} is not a valid number: {raw:?}")),
        Err(_) => Ok(None),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}
