// crates/core/src/error.rs

//! Error taxonomy of the routing pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Every way a single `/ai` or `/functions` request can fail.
///
/// None of these are retried by the pipeline and none are downgraded to an
/// empty result.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("copilot code must contain exactly two `######` markers, found {found}")]
    InsufficientMarkers { found: usize },

    #[error("copilot code must contain exactly two `######` markers, found {found}")]
    AmbiguousMarkers { found: usize },

    #[error("classifier returned unroutable category `{0}`")]
    UnroutableCategory(String),

    #[error("invalid code extraction: {0}")]
    InvalidExtraction(String),

    #[error("invalid function metadata: {0}")]
    InvalidFunctionMetadata(String),

    #[error("upstream model call failed: {0}")]
    Upstream(String),
}

impl PipelineError {
    /// Stable identifier used in error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::InsufficientMarkers { .. } => "insufficient_markers",
            PipelineError::AmbiguousMarkers { .. } => "ambiguous_markers",
            PipelineError::UnroutableCategory(_) => "unroutable_category",
            PipelineError::InvalidExtraction(_) => "invalid_extraction",
            PipelineError::InvalidFunctionMetadata(_) => "invalid_function_metadata",
            PipelineError::Upstream(_) => "upstream",
        }
    }

    /// True for errors caused by the caller's input rather than the model.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PipelineError::InsufficientMarkers { .. } | PipelineError::AmbiguousMarkers { .. }
        )
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(e: anyhow::Error) -> Self {
        // Alternate formatting keeps the whole context chain.
        PipelineError::Upstream(format!("{e:#}"))
    }
}
