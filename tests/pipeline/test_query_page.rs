// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Tests for the HTML query page served over HTTP

use axum::http::StatusCode;
use std::sync::Arc;
use websearch_rag::api::{router, HealthResponse};
use websearch_rag::pipeline::RagPipeline;

use super::support::{config_for, serve, spawn_stub, Recorder, StubConfig, PARIS_ANSWER, PARIS_HTML};

#[cfg(test)]
mod query_page_tests {
    use super::*;

    async fn start_app(stub: StubConfig) -> (String, Recorder) {
        let (stub_url, recorder) = spawn_stub(stub).await;
        let pipeline = RagPipeline::from_config(&config_for(&stub_url)).unwrap();
        let app_url = serve(router(Arc::new(pipeline))).await;
        (app_url, recorder)
    }

    #[tokio::test]
    async fn test_page_without_query_shows_only_the_field() {
        let (app_url, recorder) = start_app(StubConfig::answering(PARIS_HTML, PARIS_ANSWER)).await;

        for path in ["/", "/?q="] {
            let response = reqwest::get(format!("{}{}", app_url, path)).await.unwrap();
            assert_eq!(response.status().as_u16(), 200);
            let page = response.text().await.unwrap();
            assert!(page.contains("<title>RAG for Web Search</title>"));
            assert!(page.contains("Enter your search query:"));
            assert!(!page.contains("<article"));
            assert!(!page.contains("<aside"));
        }
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_page_renders_answer_and_sidebar() {
        let (app_url, recorder) = start_app(StubConfig::answering(PARIS_HTML, PARIS_ANSWER)).await;

        let response = reqwest::get(format!("{}/?q=capital+of+France", app_url))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let page = response.text().await.unwrap();

        assert!(page.contains("<h2>Overview</h2>"));
        assert!(page.contains("<strong>the</strong>"));
        assert!(page.contains("<summary>Sources (1)</summary>"));
        assert!(page.contains("https://example.com/paris"));
        assert_eq!(recorder.events(), vec!["search", "completion"]);
        assert_eq!(
            recorder.completions()[0].body["messages"][1]["content"],
            "capital of France"
        );
    }

    #[tokio::test]
    async fn test_page_reports_which_call_failed() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.search_status = StatusCode::FORBIDDEN;
        let (app_url, recorder) = start_app(stub).await;

        let response = reqwest::get(format!("{}/?q=blocked", app_url)).await.unwrap();
        assert_eq!(response.status().as_u16(), 502);
        let page = response.text().await.unwrap();
        assert!(page.contains("role=\"alert\""));
        assert!(page.contains("web&#32;search&#32;failed") || page.contains("web search failed"));
        assert_eq!(recorder.events(), vec!["search"]);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app_url, _recorder) = start_app(StubConfig::answering(PARIS_HTML, PARIS_ANSWER)).await;

        let health: HealthResponse = reqwest::get(format!("{}/health", app_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health.status, "ok");
        assert!(health.features.iter().any(|f| f == "groq-chat-completions"));
    }
}
