use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// What the IDE is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Fill in the region between the two `######` markers.
    Copilot,
    Generation,
    /// `context` carries a compiler or runtime error.
    Debugging,
    Assistance,
}

/// Body of `POST /ai`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingRequest {
    #[serde(rename = "request_type")]
    pub kind: RequestKind,
    pub user_code: String,
    pub context: String,
}

/// The single text value handed to the classifier and the agents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeQuery(String);

impl CompositeQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CompositeQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Routing label chosen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Storage,
    CrossContract,
    AtomicSwap,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Storage,
        Category::CrossContract,
        Category::AtomicSwap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Storage => "storage",
            Category::CrossContract => "cross_contract",
            Category::AtomicSwap => "atomic_swap",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .ok_or_else(|| PipelineError::UnroutableCategory(label.to_string()))
    }
}

/// Output of the intent classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDecision {
    pub category: Category,
    pub reason: String,
}

/// Whether the agent's answer carries code for the editor, and which.
///
/// `code_updation_required` implies one or two snippets; more than two is
/// never valid. Cross-contract answers list contract A before contract B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionDecision {
    pub code_updation_required: bool,
    pub code_requested: Vec<String>,
}

impl ExtractionDecision {
    pub const MAX_SNIPPETS: usize = 2;

    pub fn validate(&self) -> Result<()> {
        let count = self.code_requested.len();
        if count > Self::MAX_SNIPPETS {
            return Err(PipelineError::InvalidExtraction(format!(
                "expected at most {} code snippets, got {count}",
                Self::MAX_SNIPPETS
            )));
        }
        if self.code_updation_required && count == 0 {
            return Err(PipelineError::InvalidExtraction(
                "code update required but no code snippet was returned".to_string(),
            ));
        }
        Ok(())
    }
}

/// Success body of `POST /ai`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub ide_update: bool,
    pub agent_response: String,
    pub code1: String,
    pub code2: String,
}

/// One public contract function as described by the functioniser agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FunctionSpec {
    pub name: String,
    pub parameters: Vec<FunctionParam>,
    /// Rust return type, `"void"` for `()`.
    pub returns: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FunctionParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Success body of `POST /functions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContractFunctions {
    pub functions: Vec<FunctionSpec>,
}
