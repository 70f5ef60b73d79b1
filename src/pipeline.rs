// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search-then-summarize pipeline
//!
//! One linear pass per query: intake gate → fetch results page → extract
//! snippets → synthesize answer. Every external call happens at most once.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::intake::Intake;
use crate::search::{
    extract_snippets, snippets_to_json, SearchError, SearchFetcher, SearxFetcher, SnippetRecord,
};
use crate::synthesis::{AnswerSynthesizer, GroqChatClient, SynthesisError};

/// Per-query state handed from extraction to synthesis and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    /// Query exactly as submitted
    pub raw_query: String,
    /// Records in page order
    pub records: Vec<SnippetRecord>,
    /// `records` as embedded in the system instruction
    pub snippets_json: String,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagAnswer {
    pub context: QueryContext,
    /// Model output, unmodified markdown
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Empty query; nothing was fetched or generated
    Halted,
    Answered(RagAnswer),
}

/// Failure of one of the two outbound calls
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("web search failed: {0}")]
    Search(#[from] SearchError),

    #[error("answer synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

pub struct RagPipeline {
    fetcher: Arc<dyn SearchFetcher>,
    synthesizer: AnswerSynthesizer,
}

impl RagPipeline {
    pub fn new(fetcher: Arc<dyn SearchFetcher>, synthesizer: AnswerSynthesizer) -> Self {
        Self {
            fetcher,
            synthesizer,
        }
    }

    /// Wire the SearXNG fetcher and Groq client from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let fetcher = SearxFetcher::new(config.search.clone())?;
        let client = GroqChatClient::new(&config.synthesis)?;
        let synthesizer = AnswerSynthesizer::new(Arc::new(client), config.synthesis.model.clone());
        Ok(Self::new(Arc::new(fetcher), synthesizer))
    }

    pub async fn run(&self, query: &str) -> Result<PipelineOutcome, PipelineError> {
        let query = match Intake::from_query(query) {
            Intake::Halt => {
                debug!("Empty query; halting without any requests");
                return Ok(PipelineOutcome::Halted);
            }
            Intake::Run(query) => query,
        };

        let html = self.fetcher.fetch(&query).await?;
        let records = extract_snippets(&html);
        let snippets_json = snippets_to_json(&records)?;
        info!(
            "Search via {} produced {} snippet records",
            self.fetcher.name(),
            records.len()
        );

        let answer = self.synthesizer.synthesize(&query, &snippets_json).await?;

        Ok(PipelineOutcome::Answered(RagAnswer {
            context: QueryContext {
                raw_query: query,
                records,
                snippets_json,
            },
            answer,
        }))
    }
}
