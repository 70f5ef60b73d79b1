// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer synthesis: prompt assembly plus a single completion call

use std::sync::Arc;
use tracing::info;

use super::client::ChatCompletion;
use super::prompt::build_system_prompt;
use super::types::{ChatCompletionRequest, ChatMessage, SynthesisError};

/// Builds the two-message request and returns the model's text untouched
#[derive(Clone)]
pub struct AnswerSynthesizer {
    backend: Arc<dyn ChatCompletion>,
    model: String,
}

impl AnswerSynthesizer {
    pub fn new(backend: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// System message carries the snippet JSON; user message is the raw query
    pub fn build_request(&self, query: &str, snippets_json: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(build_system_prompt(snippets_json)),
                ChatMessage::user(query),
            ],
        }
    }

    pub async fn synthesize(
        &self,
        query: &str,
        snippets_json: &str,
    ) -> Result<String, SynthesisError> {
        let request = self.build_request(query, snippets_json);
        let answer = self.backend.complete(&request).await?;
        info!(
            "Synthesized {} words via {} ({})",
            answer.split_whitespace().count(),
            self.backend.name(),
            self.model
        );
        Ok(answer)
    }
}
