// crates/host/src/agents/atomic_swap/mod.rs

//! Atomic swap agent: exchanging two tokens in one transaction.

mod prompts;

use anyhow::Result;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::CompositeQuery;

use super::common;
use crate::log::Agent;

pub async fn run_atomic_swap_agent<C: AiClient>(
    client: &C,
    query: &CompositeQuery,
) -> Result<String> {
    let prompt = prompts::build_atomic_swap_prompt(query.as_str());
    common::stream_completion(client, Agent::AtomicSwap, common::agent_request(prompt)).await
}
