// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search results page fetching

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::config::SearchConfig;
use super::types::SearchError;

/// Source of raw search results HTML
///
/// Implementations issue exactly one request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchFetcher: Send + Sync {
    /// Fetch the results page for `query` and return its body as text
    async fn fetch(&self, query: &str) -> Result<String, SearchError>;

    /// Fetcher name for logging
    fn name(&self) -> &'static str;
}

/// Fetches result pages from a SearXNG instance's HTML interface
pub struct SearxFetcher {
    client: Client,
    config: SearchConfig,
}

impl SearxFetcher {
    /// Create a new fetcher with the fixed browser headers and configured timeout
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| SearchError::Http(format!("invalid Accept-Language header: {}", e)))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build search HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[async_trait]
impl SearchFetcher for SearxFetcher {
    async fn fetch(&self, query: &str) -> Result<String, SearchError> {
        let url = build_search_url(&self.config, query)?;
        info!("Searching {} for query ({} chars)", self.config.base_url, query.len());
        debug!("Search URL: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                SearchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        debug!("Received {} bytes of results HTML", html.len());
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "searx"
    }
}

/// Build `<base>/search?q=<query>&region=<region>&engines=<engines>`
///
/// The query is form-encoded, so `&`, `#`, spaces and non-ASCII text survive intact.
pub fn build_search_url(config: &SearchConfig, query: &str) -> Result<Url, SearchError> {
    let endpoint = config.endpoint();
    Url::parse_with_params(
        &endpoint,
        &[
            ("q", query),
            ("region", config.region.as_str()),
            ("engines", config.engines.as_str()),
        ],
    )
    .map_err(|e| SearchError::InvalidUrl {
        endpoint,
        reason: e.to_string(),
    })
}
