// crates/host/src/log.rs

//! Structured logging for agent operations.

use std::fmt::Display;

use tracing_subscriber::EnvFilter;

use ide_agent_core::types::Category;

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Agent type used as the `agent` field of every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    Classifier,
    General,
    Storage,
    CrossContract,
    AtomicSwap,
    Extractor,
    Functioniser,
}

impl Agent {
    pub fn name(&self) -> &'static str {
        match self {
            Agent::Classifier => "classifier",
            Agent::General => "general",
            Agent::Storage => "storage",
            Agent::CrossContract => "cross_contract",
            Agent::AtomicSwap => "atomic_swap",
            Agent::Extractor => "extractor",
            Agent::Functioniser => "functioniser",
        }
    }
}

impl From<Category> for Agent {
    fn from(category: Category) -> Self {
        match category {
            Category::General => Agent::General,
            Category::Storage => Agent::Storage,
            Category::CrossContract => Agent::CrossContract,
            Category::AtomicSwap => Agent::AtomicSwap,
        }
    }
}

/// Log an outgoing model call.
pub fn agent_call(agent: Agent, prompt_chars: usize) {
    tracing::info!(agent = agent.name(), prompt_chars, "→ model call");
}

/// Log agent text response.
pub fn agent_response(agent: Agent, text: &str) {
    tracing::info!(
        agent = agent.name(),
        chars = text.len(),
        preview = %truncate(text, 200),
        "← model response"
    );
}

/// Log an agent failure.
pub fn agent_error(agent: Agent, message: impl Display) {
    tracing::error!(agent = agent.name(), "✗ {}", message);
}

/// Truncate and clean string for display.
pub fn truncate(s: &str, max: usize) -> String {
    let clean: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let trimmed = clean.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
