// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion wire types and synthesis errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One role-tagged message of a chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Body of `POST <base>/chat/completions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Content of the first message with the given role
    pub fn content_for(&self, role: ChatRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, verbatim
    pub fn into_first_text(self) -> Result<String, SynthesisError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(SynthesisError::EmptyCompletion)
    }
}

/// Errors that can occur while generating the answer
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Completion request timed out
    #[error("completion request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Transport-level failure talking to the completion API
    #[error("completion request failed: {0}")]
    Http(String),

    /// Completion API answered with a non-success status (auth, rate limit, ...)
    #[error("completion API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match the chat-completion schema
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),

    /// Response contained no choices or no message text
    #[error("completion response contained no message text")]
    EmptyCompletion,
}
