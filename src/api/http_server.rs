// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::pipeline::{PipelineOutcome, RagPipeline};
use crate::render::{render_page, PageBody};
use crate::version;

#[derive(Clone)]
struct AppState {
    pipeline: Arc<RagPipeline>,
}

#[derive(Debug, Deserialize)]
struct QueryParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
}

/// `GET /?q=<query>` runs the pipeline; `GET /health` reports the build
pub fn router(pipeline: Arc<RagPipeline>) -> Router {
    let state = AppState { pipeline };

    Router::new()
        // Query page
        .route("/", get(query_page_handler))
        // Health check
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(pipeline: RagPipeline, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(Arc::new(pipeline));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Query page listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn query_page_handler(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> impl IntoResponse {
    match state.pipeline.run(&params.q).await {
        Ok(PipelineOutcome::Halted) => (StatusCode::OK, Html(render_page("", PageBody::Empty))),
        Ok(PipelineOutcome::Answered(result)) => (
            StatusCode::OK,
            Html(render_page(&params.q, PageBody::Answer(&result))),
        ),
        Err(e) => {
            error!("Query failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Html(render_page(&params.q, PageBody::Error(&e.to_string()))),
            )
        }
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
        features: version::FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}
