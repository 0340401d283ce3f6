// crates/host/src/agents/functioniser/mod.rs

//! Functioniser: lists the public entry points of a contract so the IDE
//! can render invocation forms.

mod prompts;

use ide_agent_core::ai_client::{AiClient, ChatRequest};
use ide_agent_core::types::ContractFunctions;
use ide_agent_core::{PipelineError, Result};

use super::common;
use crate::log::Agent;

pub async fn describe_functions<C: AiClient>(
    client: &C,
    contract_code: &str,
) -> Result<ContractFunctions> {
    let request = ChatRequest::user(prompts::build_functioniser_prompt(contract_code))
        .with_temperature(0.3)
        .with_max_completion_tokens(2048)
        .json_mode();

    let raw = common::json_completion(client, Agent::Functioniser, request).await?;
    let functions = parse_functions(&raw)?;

    tracing::info!(functions = functions.functions.len(), "described contract");
    Ok(functions)
}

fn parse_functions(raw: &str) -> Result<ContractFunctions> {
    serde_json::from_str(common::json_body(raw))
        .map_err(|e| PipelineError::InvalidFunctionMetadata(e.to_string()))
}
