// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Output rendering
//!
//! The answer is the primary view; the snippet records go to an auxiliary
//! list, one `**Snippet**` / `**Source**` entry per record in page order.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::pipeline::RagAnswer;
use crate::search::SnippetRecord;
use crate::version;

pub const PAGE_TITLE: &str = "RAG for Web Search";
pub const PAGE_ICON: &str = "🔍";
pub const QUERY_LABEL: &str = "Enter your search query:";

/// Markdown for one auxiliary-panel entry
pub fn sidebar_entry_markdown(record: &SnippetRecord) -> String {
    entry_markdown(&record.snippet, &record.source)
}

/// Page variant of [`sidebar_entry_markdown`] with the source as an autolink
fn page_entry_markdown(record: &SnippetRecord) -> String {
    if is_autolinkable(&record.source) {
        entry_markdown(&record.snippet, &format!("<{}>", record.source))
    } else {
        sidebar_entry_markdown(record)
    }
}

fn entry_markdown(snippet: &str, source: &str) -> String {
    format!("**Snippet**: {}  \n\n**Source**: {}", snippet, source)
}

fn is_autolinkable(source: &str) -> bool {
    (source.starts_with("http://") || source.starts_with("https://"))
        && !source
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '<' || c == '>')
}

/// Convert markdown to sanitized HTML
///
/// Raw HTML in the input is rendered as literal text.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut unsafe_html = String::new();
    html::push_html(&mut unsafe_html, parser);
    ammonia::clean(&unsafe_html)
}

/// Plain-text rendering for the terminal: answer first, then the sources
pub fn render_terminal(result: &RagAnswer) -> String {
    let mut out = String::new();
    out.push_str(result.answer.trim_end());
    out.push_str("\n\n--- Sources ---\n");
    if result.context.records.is_empty() {
        out.push_str("\n(no snippets found)\n");
    }
    for record in &result.context.records {
        out.push('\n');
        out.push_str(&sidebar_entry_markdown(record));
        out.push('\n');
    }
    out
}

/// What the page shows below the query field
pub enum PageBody<'a> {
    /// No query submitted yet, or an empty one
    Empty,
    Answer(&'a RagAnswer),
    Error(&'a str),
}

/// Full HTML page: query field, answer view and a collapsed snippet sidebar
pub fn render_page(query: &str, body: PageBody<'_>) -> String {
    let mut main = String::new();
    let mut sidebar = String::new();

    match body {
        PageBody::Empty => {}
        PageBody::Answer(result) => {
            main.push_str("<article class=\"answer\">");
            main.push_str(&markdown_to_html(&result.answer));
            main.push_str("</article>");

            sidebar.push_str(&format!(
                "<aside class=\"sidebar\"><details><summary>Sources ({})</summary>",
                result.context.records.len()
            ));
            for record in &result.context.records {
                sidebar.push_str("<div class=\"snippet\">");
                sidebar.push_str(&markdown_to_html(&page_entry_markdown(record)));
                sidebar.push_str("</div>");
            }
            sidebar.push_str("</details></aside>");
        }
        PageBody::Error(message) => {
            main.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{}</div>",
                ammonia::clean_text(message)
            ));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="websearch-rag {version}">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>">
<style>
body {{ font-family: sans-serif; display: flex; margin: 0; }}
.sidebar {{ max-width: 22rem; padding: 1rem; background: #f0f2f6; }}
.snippet {{ border-bottom: 1px solid #ddd; }}
main {{ flex: 1; max-width: 46rem; padding: 1rem 2rem; }}
input[name=q] {{ width: 100%; padding: .5rem; font-size: 1rem; }}
.error {{ color: #b00020; margin-top: 1rem; }}
</style>
</head>
<body>
{sidebar}
<main>
<h1>{title}</h1>
<form method="get" action="/">
<label for="q">{label}</label>
<input id="q" name="q" type="text" value="{query}" autofocus>
</form>
{main}
</main>
</body>
</html>
"#,
        version = version::VERSION_NUMBER,
        title = PAGE_TITLE,
        icon = PAGE_ICON,
        label = QUERY_LABEL,
        query = ammonia::clean_text(query),
        sidebar = sidebar,
        main = main,
    )
}
