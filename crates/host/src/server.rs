// crates/host/src/server.rs

//! HTTP surface: `POST /ai`, `POST /functions` and `GET /health`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ide_agent_core::ai_client::AiClient;
use ide_agent_core::types::{ContractFunctions, IncomingRequest, ResultEnvelope};
use ide_agent_core::PipelineError;

use crate::pipeline::Pipeline;

#[derive(Debug, Deserialize)]
pub struct FunctionsRequest {
    pub contract_code: String,
}

/// Any failure of a request, rendered as `{"error": {"kind", "message"}}`.
pub enum ApiError {
    Pipeline(PipelineError),
    /// Body that is not valid JSON or does not match the request type.
    InvalidBody(JsonRejection),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        ApiError::Pipeline(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Pipeline(e) => {
                let status = if e.is_client_error() {
                    StatusCode::UNPROCESSABLE_ENTITY
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, e.kind(), e.to_string())
            }
            ApiError::InvalidBody(rejection) => {
                (rejection.status(), "invalid_request", rejection.body_text())
            }
        };
        tracing::warn!(kind, status = status.as_u16(), "{}", message);

        let body = json!({
            "error": {"kind": kind, "message": message}
        });
        (status, Json(body)).into_response()
    }
}

pub fn router<C: AiClient + 'static>(pipeline: Pipeline<C>) -> Router {
    Router::new()
        .route("/ai", post(ai::<C>))
        .route("/functions", post(functions::<C>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(pipeline))
}

async fn ai<C: AiClient + 'static>(
    State(pipeline): State<Arc<Pipeline<C>>>,
    body: Result<Json<IncomingRequest>, JsonRejection>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let Json(request) = body?;
    Ok(Json(pipeline.handle(&request).await?))
}

async fn functions<C: AiClient + 'static>(
    State(pipeline): State<Arc<Pipeline<C>>>,
    body: Result<Json<FunctionsRequest>, JsonRejection>,
) -> Result<Json<ContractFunctions>, ApiError> {
    let Json(request) = body?;
    Ok(Json(pipeline.describe_functions(&request.contract_code).await?))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
        .context("server error")
}

/// Resolves when `signal` fires. A signal handler that could not be
/// installed never triggers a shutdown.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install Ctrl-C handler; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
