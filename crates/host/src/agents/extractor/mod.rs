// crates/host/src/agents/extractor/mod.rs

//! Code extractor: a second model pass that pulls editor-ready snippets
//! out of an agent's free-text answer.

mod prompts;

use ide_agent_core::ai_client::{AiClient, ChatRequest};
use ide_agent_core::types::{CompositeQuery, ExtractionDecision};
use ide_agent_core::{PipelineError, Result};

use super::common;
use crate::log::Agent;

pub async fn extract<C: AiClient>(
    client: &C,
    query: &CompositeQuery,
    agent_response: &str,
) -> Result<ExtractionDecision> {
    let request = ChatRequest::user(prompts::build_extractor_prompt(query.as_str(), agent_response))
        .with_temperature(0.5)
        .with_max_completion_tokens(8192)
        .json_mode();

    let raw = common::json_completion(client, Agent::Extractor, request).await?;
    let decision = parse_extraction(&raw)?;

    tracing::info!(
        code_updation_required = decision.code_updation_required,
        snippets = decision.code_requested.len(),
        "extracted code"
    );
    Ok(decision)
}

fn parse_extraction(raw: &str) -> Result<ExtractionDecision> {
    let decision: ExtractionDecision = serde_json::from_str(common::json_body(raw))
        .map_err(|e| PipelineError::InvalidExtraction(format!("malformed extractor output: {e}")))?;
    decision.validate()?;
    Ok(decision)
}
