// crates/core/src/assembler.rs

//! Final response envelope for the IDE.

use crate::error::Result;
use crate::types::{ExtractionDecision, ResultEnvelope};

/// Merge the extractor's decision with the agent's raw text.
///
/// Cardinality violations are returned as errors instead of guessing which
/// snippet belongs where.
pub fn assemble(extraction: &ExtractionDecision, agent_response: &str) -> Result<ResultEnvelope> {
    extraction.validate()?;

    let (code1, code2) = if extraction.code_updation_required {
        let mut snippets = extraction.code_requested.iter().cloned();
        (
            snippets.next().unwrap_or_default(),
            snippets.next().unwrap_or_default(),
        )
    } else {
        (String::new(), String::new())
    };

    Ok(ResultEnvelope {
        ide_update: extraction.code_updation_required,
        agent_response: agent_response.to_string(),
        code1,
        code2,
    })
}
