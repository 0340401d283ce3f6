// crates/host/src/agents/general/mod.rs

//! General agent: strings, greetings and anything without a specialist.

mod prompts;

use anyhow::Result;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::CompositeQuery;

use super::common;
use crate::log::Agent;

pub async fn run_general_agent<C: AiClient>(client: &C, query: &CompositeQuery) -> Result<String> {
    let prompt = prompts::build_general_prompt(query.as_str());
    common::stream_completion(client, Agent::General, common::agent_request(prompt)).await
}
