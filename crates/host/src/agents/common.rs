// crates/host/src/agents/common.rs

//! Model call helpers shared across all agents.

use anyhow::Result;

use ide_agent_core::ai_client::{AiClient, ChatRequest};

use crate::log::{self, Agent};

/// Sampling used by the four category agents.
pub fn agent_request(prompt: String) -> ChatRequest {
    ChatRequest::user(prompt)
        .with_temperature(0.6)
        .with_top_p(0.95)
        .with_max_completion_tokens(2048)
        .hide_reasoning()
}

/// Run a free-text agent call with streaming and log the outcome.
pub async fn stream_completion<C: AiClient>(
    client: &C,
    agent: Agent,
    request: ChatRequest,
) -> Result<String> {
    log::agent_call(agent, prompt_chars(&request));

    match client.chat_streamed(request).await {
        Ok(text) => {
            log::agent_response(agent, &text);
            Ok(text)
        }
        Err(e) => {
            log::agent_error(agent, format!("{e:#}"));
            Err(e)
        }
    }
}

/// Run a JSON-mode call and return the raw JSON text of the first choice.
pub async fn json_completion<C: AiClient>(
    client: &C,
    agent: Agent,
    request: ChatRequest,
) -> Result<String> {
    log::agent_call(agent, prompt_chars(&request));

    let result = match client.chat(request).await {
        Ok(response) => response.into_text(),
        Err(e) => Err(e),
    };

    match result {
        Ok(text) => {
            log::agent_response(agent, &text);
            Ok(text)
        }
        Err(e) => {
            log::agent_error(agent, format!("{e:#}"));
            Err(e)
        }
    }
}

/// Strip a Markdown fence some models wrap around JSON-mode output.
pub fn json_body(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn prompt_chars(request: &ChatRequest) -> usize {
    request
        .messages
        .iter()
        .filter_map(|m| m.get("content").and_then(|c| c.as_str()))
        .map(str::len)
        .sum()
}
