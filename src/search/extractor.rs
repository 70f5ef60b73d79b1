// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Snippet extraction from a search results page
//!
//! Result snippets live in `<p class="content">` and their links in
//! `<a class="url_header">`. The two node lists are collected independently
//! in document order and zipped by position.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, warn};

use super::types::{SearchError, SnippetRecord};

const SNIPPET_SELECTOR: &str = "p.content";
const SOURCE_SELECTOR: &str = "a.url_header";

/// Extract snippet records from raw search results HTML
///
/// Pairs the Nth snippet with the Nth source anchor and stops at the shorter
/// list. A page without matches yields an empty vector.
pub fn extract_snippets(html: &str) -> Vec<SnippetRecord> {
    let document = Html::parse_document(html);

    let snippets = select_all(&document, SNIPPET_SELECTOR, snippet_text);
    let sources = select_all(&document, SOURCE_SELECTOR, source_href);

    if snippets.len() != sources.len() {
        warn!(
            "Snippet/anchor count mismatch: {} snippets, {} anchors; pairing first {}",
            snippets.len(),
            sources.len(),
            snippets.len().min(sources.len())
        );
    }

    let records: Vec<SnippetRecord> = snippets
        .into_iter()
        .zip(sources)
        .map(|(snippet, source)| SnippetRecord::new(snippet, source))
        .collect();

    debug!("Extracted {} snippet records", records.len());
    records
}

/// Serialize records as indented JSON (four spaces per level)
pub fn snippets_to_json(records: &[SnippetRecord]) -> Result<String, SearchError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn select_all<F>(document: &Html, selector: &str, map: F) -> Vec<String>
where
    F: Fn(ElementRef) -> String,
{
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).map(map).collect(),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", selector, e);
            Vec::new()
        }
    }
}

/// All descendant text, concatenated as-is
fn snippet_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn source_href(element: ElementRef) -> String {
    match element.value().attr("href") {
        Some(href) => href.to_string(),
        None => {
            // keeps positional pairing intact
            warn!("Result anchor without href; using empty source");
            String::new()
        }
    }
}
