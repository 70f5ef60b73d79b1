// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for search-result scraping

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A snippet scraped from the search results page, paired with its source link
///
/// Serialized with the capitalized `Snippet` / `Source` keys because that is
/// the shape the language model sees inside the system instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    /// Text of the result snippet
    #[serde(rename = "Snippet")]
    pub snippet: String,
    /// `href` of the matching result header anchor
    #[serde(rename = "Source")]
    pub source: String,
}

impl SnippetRecord {
    pub fn new(snippet: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            source: source.into(),
        }
    }
}

/// Errors that can occur while fetching or scraping the results page
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search request timed out
    #[error("search request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// Transport-level failure talking to the search host
    #[error("search request failed: {0}")]
    Http(String),

    /// Search host answered with a non-success status
    #[error("search host returned HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The configured search endpoint is not a valid URL
    #[error("invalid search endpoint '{endpoint}': {reason}")]
    InvalidUrl { endpoint: String, reason: String },

    /// Snippet records could not be serialized
    #[error("failed to serialize snippets: {0}")]
    Serialization(#[from] serde_json::Error),
}
