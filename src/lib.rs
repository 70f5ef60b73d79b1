// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod intake;
pub mod pipeline;
pub mod render;
pub mod search;
pub mod synthesis;
pub mod version;

// Re-export main types
pub use config::{AppConfig, ConfigError};
pub use intake::Intake;
pub use pipeline::{PipelineError, PipelineOutcome, QueryContext, RagAnswer, RagPipeline};
pub use search::{SearchConfig, SearchError, SearchFetcher, SearxFetcher, SnippetRecord};
pub use synthesis::{
    AnswerSynthesizer, ChatCompletion, ChatCompletionRequest, GroqChatClient, SynthesisConfig,
    SynthesisError,
};
