// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search step of the pipeline
//!
//! Fetches one SearXNG results page per query and scrapes it into
//! [`SnippetRecord`]s:
//!
//! ```text
//! query → SearxFetcher → HTML → extract_snippets → Vec<SnippetRecord> → JSON
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod types;

pub use config::SearchConfig;
pub use extractor::{extract_snippets, snippets_to_json};
pub use fetcher::{build_search_url, SearchFetcher, SearxFetcher};
pub use types::{SearchError, SnippetRecord};
