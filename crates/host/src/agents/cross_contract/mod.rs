// crates/host/src/agents/cross_contract/mod.rs

//! Cross-contract agent: one contract calling another.

mod prompts;

use anyhow::Result;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::CompositeQuery;

use super::common;
use crate::log::Agent;

pub async fn run_cross_contract_agent<C: AiClient>(
    client: &C,
    query: &CompositeQuery,
) -> Result<String> {
    let prompt = prompts::build_cross_contract_prompt(query.as_str());
    common::stream_completion(client, Agent::CrossContract, common::agent_request(prompt)).await
}
