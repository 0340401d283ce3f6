mod agents;
mod config;
mod log;
mod pipeline;
mod server;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::groq_client::GroqClient;

use config::Args;
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    log::init(&args.log);

    let client = Arc::new(GroqClient::from_env()?);
    tracing::info!(model = client.model(), "model client ready");

    run(client, &args).await
}

async fn run<C: AiClient + 'static>(client: Arc<C>, args: &Args) -> Result<()> {
    let addr = args.socket_addr()?;
    let app = server::router(Pipeline::new(client));
    server::serve(addr, app).await
}
