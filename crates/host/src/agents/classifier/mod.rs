// crates/host/src/agents/classifier/mod.rs

//! Intent classifier: picks the category agent for a composite query.

mod prompts;

use schemars::JsonSchema;
use serde::Deserialize;

use ide_agent_core::ai_client::{AiClient, ChatRequest};
use ide_agent_core::types::{Category, ClassificationDecision, CompositeQuery};
use ide_agent_core::{PipelineError, Result};

use super::common;
use crate::log::Agent;

/// Classifier output as advertised to the model and as parsed. The label
/// is read as plain text so an unknown category is reported as such
/// instead of as malformed JSON.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct Classification {
    /// Agent to route to.
    #[schemars(with = "Category")]
    expected_field: String,
    /// Why that agent was chosen.
    #[serde(default)]
    reason: String,
}

pub async fn classify<C: AiClient>(
    client: &C,
    query: &CompositeQuery,
) -> Result<ClassificationDecision> {
    let request = ChatRequest::user(prompts::build_classifier_prompt(query.as_str()))
        .with_temperature(0.5)
        .json_mode()
        .hide_reasoning();

    let raw = common::json_completion(client, Agent::Classifier, request).await?;
    let decision = parse_classification(&raw)?;

    tracing::info!(category = %decision.category, reason = %decision.reason, "classified query");
    Ok(decision)
}

fn parse_classification(raw: &str) -> Result<ClassificationDecision> {
    let parsed: Classification = serde_json::from_str(common::json_body(raw))
        .map_err(|e| PipelineError::Upstream(format!("malformed classifier output: {e}")))?;

    Ok(ClassificationDecision {
        category: parsed.expected_field.parse()?,
        reason: parsed.reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::prompt_utils::json_schema;
    use crate::test_support::ScriptedClient;

    #[test]
    fn parses_each_label() {
        for category in Category::ALL {
            let raw = format!(r#"{{"expected_field": "{category}", "reason": "r"}}"#);
            assert_eq!(parse_classification(&raw).unwrap().category, category);
        }
    }

    #[test]
    fn advertised_schema_lists_the_four_labels() {
        let schema = json_schema::<Classification>();
        assert!(schema.contains("expected_field"));
        assert!(schema.contains("reason"));
        for category in Category::ALL {
            assert!(schema.contains(&format!("\"{category}\"")), "{schema}");
        }
    }

    #[test]
    fn unknown_label_is_unroutable() {
        let err = parse_classification(r#"{"expected_field": "nft", "reason": "r"}"#).unwrap_err();
        assert!(matches!(err, PipelineError::UnroutableCategory(ref l) if l == "nft"));
    }

    #[test]
    fn malformed_output_is_upstream() {
        let err = parse_classification("storage, obviously").unwrap_err();
        assert_eq!(err.kind(), "upstream");
    }

    #[tokio::test]
    async fn classify_uses_json_mode() {
        let client = ScriptedClient::new([
            r#"{"expected_field": "cross_contract", "reason": "calls another contract"}"#,
        ]);
        let query = CompositeQuery::new("Write a contract that calls another contract");

        let decision = classify(&client, &query).await.unwrap();
        assert_eq!(decision.category, Category::CrossContract);
        assert_eq!(decision.reason, "calls another contract");

        let request = &client.requests()[0];
        assert_eq!(request.temperature, Some(0.5));
        assert!(request.response_format.is_some());
        assert!(!request.stream);
        assert!(client.prompts()[0].ends_with(query.as_str()));
    }
}
