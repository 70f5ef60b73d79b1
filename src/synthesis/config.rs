// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the answer synthesizer

use std::fmt;

/// Default chat model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default OpenAI-compatible API base (Groq)
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Configuration for the chat-completion client
#[derive(Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Bearer credential for the completion API
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// API base; `/chat/completions` is appended
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SynthesisConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Returns `None` when the API key is absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty())?;
        let mut config = Self::new(api_key);
        if let Some(model) = lookup("RAG_LLM_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = lookup("RAG_LLM_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup("RAG_LLM_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout_secs = timeout;
        }
        Some(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model identifier must not be empty".to_string());
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "completion base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("completion timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// Hand-written so the credential never reaches logs.
impl fmt::Debug for SynthesisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesisConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
