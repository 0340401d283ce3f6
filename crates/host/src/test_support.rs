// crates/host/src/test_support.rs

//! Scripted model client for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::json;

use ide_agent_core::ai_client::{AiClient, ChatRequest, ChatResponse};

/// Replays canned replies in order and records every request it receives.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A client whose first call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(Vec::<String>::new()).then_fail(message)
    }

    pub fn then_fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Content of the single user message of every request, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.messages[0]["content"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn chat(&self, request: ChatRequest) -> anyhow::Result<ChatResponse> {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted reply left"))?;

        match reply {
            Ok(text) => Ok(serde_json::from_value(json!({
                "choices": [{"message": {"role": "assistant", "content": text}}]
            }))?),
            Err(message) => Err(anyhow!(message)),
        }
    }
}
