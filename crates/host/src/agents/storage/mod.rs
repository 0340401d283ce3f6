// crates/host/src/agents/storage/mod.rs

//! Storage agent: persisting and reading contract data.

mod prompts;

use anyhow::Result;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::CompositeQuery;

use super::common;
use crate::log::Agent;

pub async fn run_storage_agent<C: AiClient>(client: &C, query: &CompositeQuery) -> Result<String> {
    let prompt = prompts::build_storage_prompt(query.as_str());
    common::stream_completion(client, Agent::Storage, common::agent_request(prompt)).await
}
