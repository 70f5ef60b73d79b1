// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Tests for the outbound HTTP clients against local stubs

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;
use websearch_rag::search::config::{ACCEPT_LANGUAGE, BROWSER_USER_AGENT};
use websearch_rag::search::{SearchError, SearchFetcher, SearxFetcher};
use websearch_rag::synthesis::{
    ChatCompletion, ChatCompletionRequest, ChatMessage, GroqChatClient, SynthesisError,
};

use super::support::{config_for, spawn_stub, StubConfig, PARIS_ANSWER, PARIS_HTML};

#[cfg(test)]
mod http_client_tests {
    use super::*;

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![
                ChatMessage::system("use only the snippets"),
                ChatMessage::user("capital of France"),
            ],
        }
    }

    #[tokio::test]
    async fn test_searx_fetcher_sends_browser_headers_and_encoded_query() {
        let (url, recorder) = spawn_stub(StubConfig::answering(PARIS_HTML, PARIS_ANSWER)).await;
        let fetcher = SearxFetcher::new(config_for(&url).search).unwrap();

        let html = fetcher.fetch("capital of France & more").await.unwrap();
        assert_eq!(html, PARIS_HTML);

        let searches = recorder.searches();
        assert_eq!(searches.len(), 1);
        assert_eq!(
            searches[0].raw_query.as_deref(),
            Some("q=capital+of+France+%26+more&region=de&engines=bing")
        );
        assert_eq!(searches[0].accept_language.as_deref(), Some(ACCEPT_LANGUAGE));
        assert_eq!(searches[0].user_agent.as_deref(), Some(BROWSER_USER_AGENT));
    }

    #[tokio::test]
    async fn test_searx_fetcher_non_success_status() {
        let mut stub = StubConfig::answering("<html>blocked</html>", PARIS_ANSWER);
        stub.search_status = StatusCode::TOO_MANY_REQUESTS;
        let (url, recorder) = spawn_stub(stub).await;
        let fetcher = SearxFetcher::new(config_for(&url).search).unwrap();

        let err = fetcher.fetch("anything").await.unwrap_err();
        assert!(matches!(err, SearchError::HttpStatus { status: 429, .. }));
        // attempted exactly once
        assert_eq!(recorder.searches().len(), 1);
    }

    #[tokio::test]
    async fn test_searx_fetcher_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let fetcher = SearxFetcher::new(config_for(&url).search).unwrap();
        let err = fetcher.fetch("anything").await.unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
    }

    #[tokio::test]
    async fn test_searx_fetcher_times_out_without_retry() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.response_delay = Duration::from_secs(5);
        let (url, recorder) = spawn_stub(stub).await;
        let mut config = config_for(&url).search;
        config.timeout_secs = 1;
        let fetcher = SearxFetcher::new(config).unwrap();

        let err = fetcher.fetch("capital of France").await.unwrap_err();
        assert!(matches!(err, SearchError::Timeout { timeout_secs: 1 }));
        assert_eq!(recorder.searches().len(), 1);
    }

    #[tokio::test]
    async fn test_groq_client_posts_bearer_request() {
        let (url, recorder) = spawn_stub(StubConfig::answering(PARIS_HTML, PARIS_ANSWER)).await;
        let client = GroqChatClient::new(&config_for(&url).synthesis).unwrap();

        let answer = client.complete(&request()).await.unwrap();
        assert_eq!(answer, PARIS_ANSWER);

        let completions = recorder.completions();
        assert_eq!(completions.len(), 1);
        assert_eq!(
            completions[0].authorization.as_deref(),
            Some("Bearer gsk_test_key")
        );
        assert_eq!(
            completions[0].body,
            json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [
                    {"role": "system", "content": "use only the snippets"},
                    {"role": "user", "content": "capital of France"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_groq_client_surfaces_api_error_body() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.completion_status = StatusCode::UNAUTHORIZED;
        stub.completion_body = json!({"error": {"message": "Invalid API Key", "code": "invalid_api_key"}});
        let (url, recorder) = spawn_stub(stub).await;
        let client = GroqChatClient::new(&config_for(&url).synthesis).unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        match err {
            SynthesisError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API Key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(recorder.completions().len(), 1);
    }

    #[tokio::test]
    async fn test_groq_client_rejects_malformed_body() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.completion_body = json!({"unexpected": true});
        let (url, _recorder) = spawn_stub(stub).await;
        let client = GroqChatClient::new(&config_for(&url).synthesis).unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_groq_client_empty_choices() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.completion_body = json!({"choices": []});
        let (url, _recorder) = spawn_stub(stub).await;
        let client = GroqChatClient::new(&config_for(&url).synthesis).unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_groq_client_times_out_without_retry() {
        let mut stub = StubConfig::answering(PARIS_HTML, PARIS_ANSWER);
        stub.response_delay = Duration::from_secs(5);
        let (url, recorder) = spawn_stub(stub).await;
        let mut config = config_for(&url).synthesis;
        config.timeout_secs = 1;
        let client = GroqChatClient::new(&config).unwrap();

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::Timeout { timeout_secs: 1 }));
        assert_eq!(recorder.completions().len(), 1);
    }
}
