// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion clients

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::config::SynthesisConfig;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, SynthesisError};

/// Backend that turns a chat request into the first completion's text
///
/// One request per call; no retries, no fallback model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, SynthesisError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Client for Groq's OpenAI-compatible chat-completion endpoint
pub struct GroqChatClient {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

impl GroqChatClient {
    pub fn new(config: &SynthesisConfig) -> Result<Self, SynthesisError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|_| SynthesisError::Http("invalid API key characters".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| SynthesisError::Http(format!("failed to build completion HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.completions_endpoint(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatCompletion for GroqChatClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, SynthesisError> {
        info!(
            "Requesting completion from {} ({} messages)",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    SynthesisError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(SynthesisError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))?;

        let text = parsed.into_first_text()?;
        debug!("Completion returned {} chars", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
