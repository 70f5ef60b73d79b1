// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer synthesis step of the pipeline
//!
//! Wraps the scraped snippets in a fixed system instruction, sends it with the
//! user's query to a chat-completion API and hands back the generated text.

pub mod client;
pub mod config;
pub mod prompt;
pub mod synthesizer;
pub mod types;

pub use client::{ChatCompletion, GroqChatClient};
pub use config::SynthesisConfig;
pub use prompt::build_system_prompt;
pub use synthesizer::AnswerSynthesizer;
pub use types::{ChatCompletionRequest, ChatMessage, ChatRole, SynthesisError};
