// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the search fetcher

/// Default search host (a public SearXNG instance)
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://searx.be";

/// Language preference sent with every search request
pub const ACCEPT_LANGUAGE: &str = "de-DE,de;q=0.9,en;q=0.8";

/// Desktop browser user agent; the search host rejects default client agents
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36 Edg/99.0.1150.36";

/// Configuration for the search fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Scheme and host of the search engine, e.g. `https://searx.be`
    pub base_url: String,
    /// `region` query parameter
    pub region: String,
    /// `engines` query parameter
    pub engines: String,
    /// `Accept-Language` header value
    pub accept_language: String,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SearchConfig {
    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            base_url: lookup("RAG_SEARCH_BASE_URL").unwrap_or(defaults.base_url),
            region: lookup("RAG_SEARCH_REGION").unwrap_or(defaults.region),
            engines: lookup("RAG_SEARCH_ENGINES").unwrap_or(defaults.engines),
            accept_language: defaults.accept_language,
            user_agent: defaults.user_agent,
            timeout_secs: lookup("RAG_SEARCH_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "search base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err("search timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Full search endpoint without query parameters
    pub fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            region: "de".to_string(),
            engines: "bing".to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout_secs: 15,
        }
    }
}
