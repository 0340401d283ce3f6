// crates/host/src/pipeline.rs

//! One request, start to finish: compose, classify, dispatch, extract,
//! assemble. Any stage failing ends the request with that error.

use std::sync::Arc;

use tracing::Instrument;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::assembler::assemble;
use ide_agent_core::composer::compose_request;
use ide_agent_core::types::{ContractFunctions, IncomingRequest, ResultEnvelope};
use ide_agent_core::Result;

use crate::agents::{self, classifier, extractor, functioniser, ModelAgents};

pub struct Pipeline<C> {
    client: Arc<C>,
    agents: ModelAgents<C>,
}

impl<C: AiClient + 'static> Pipeline<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            agents: ModelAgents::new(client.clone()),
            client,
        }
    }

    pub async fn handle(&self, request: &IncomingRequest) -> Result<ResultEnvelope> {
        let span = tracing::info_span!("ai_request", kind = ?request.kind);
        async {
            // Marker errors surface here, before any model is called.
            let query = compose_request(request)?;
            let client = self.client.as_ref();

            let decision = classifier::classify(client, &query).await?;
            let agent_response = agents::dispatch(&self.agents, decision.category, &query).await?;
            let extraction = extractor::extract(client, &query, &agent_response).await?;
            let envelope = assemble(&extraction, &agent_response)?;

            tracing::info!(
                category = %decision.category,
                ide_update = envelope.ide_update,
                "request complete"
            );
            Ok(envelope)
        }
        .instrument(span)
        .await
    }

    pub async fn describe_functions(&self, contract_code: &str) -> Result<ContractFunctions> {
        functioniser::describe_functions(self.client.as_ref(), contract_code)
            .instrument(tracing::info_span!("functions_request"))
            .await
    }
}
