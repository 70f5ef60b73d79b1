// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for websearch-rag

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-searx-groq-2025-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2025-10-16";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "searx-html-scraping",
    "positional-snippet-pairing",
    "groq-chat-completions",
    "markdown-answer-rendering",
    "http-query-page",
    "request-timeouts",
];

/// Get version information as a formatted string
pub fn get_version_string() -> String {
    format!("{} ({})", VERSION, BUILD_DATE)
}
