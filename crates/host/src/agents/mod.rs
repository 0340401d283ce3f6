// crates/host/src/agents/mod.rs

//! Agent modules for the Soroban IDE.
//!
//! Each agent is self-contained with its own:
//! - mod.rs (model call and output parsing)
//! - prompts.rs (prompt text)
//!
//! The four category agents answer in free text; the classifier, extractor
//! and functioniser use JSON mode.

pub mod common;
pub mod prompt_utils;

pub mod atomic_swap;
pub mod classifier;
pub mod cross_contract;
pub mod extractor;
pub mod functioniser;
pub mod general;
pub mod storage;

use std::sync::Arc;

use async_trait::async_trait;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::{Category, CompositeQuery};
use ide_agent_core::Result;

use crate::log::Agent;

/// One handler per routing category.
#[async_trait]
pub trait AgentSet: Send + Sync {
    async fn general(&self, query: &CompositeQuery) -> anyhow::Result<String>;
    async fn storage(&self, query: &CompositeQuery) -> anyhow::Result<String>;
    async fn cross_contract(&self, query: &CompositeQuery) -> anyhow::Result<String>;
    async fn atomic_swap(&self, query: &CompositeQuery) -> anyhow::Result<String>;
}

/// Category agents backed by a model client.
pub struct ModelAgents<C> {
    client: Arc<C>,
}

impl<C> ModelAgents<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: AiClient + 'static> AgentSet for ModelAgents<C> {
    async fn general(&self, query: &CompositeQuery) -> anyhow::Result<String> {
        general::run_general_agent(self.client.as_ref(), query).await
    }

    async fn storage(&self, query: &CompositeQuery) -> anyhow::Result<String> {
        storage::run_storage_agent(self.client.as_ref(), query).await
    }

    async fn cross_contract(&self, query: &CompositeQuery) -> anyhow::Result<String> {
        cross_contract::run_cross_contract_agent(self.client.as_ref(), query).await
    }

    async fn atomic_swap(&self, query: &CompositeQuery) -> anyhow::Result<String> {
        atomic_swap::run_atomic_swap_agent(self.client.as_ref(), query).await
    }
}

/// Hand the query to exactly one category agent.
pub async fn dispatch<A: AgentSet + ?Sized>(
    agents: &A,
    category: Category,
    query: &CompositeQuery,
) -> Result<String> {
    tracing::debug!(agent = Agent::from(category).name(), "dispatching");
    let response = match category {
        Category::General => agents.general(query).await?,
        Category::Storage => agents.storage(query).await?,
        Category::CrossContract => agents.cross_contract(query).await?,
        Category::AtomicSwap => agents.atomic_swap(query).await?,
    };
    Ok(response)
}
