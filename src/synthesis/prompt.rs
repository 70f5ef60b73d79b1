// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! System instruction template for grounded answers

/// Word cap stated in the instruction; not enforced on the output
pub const MAX_ANSWER_WORDS: usize = 300;

/// Build the system instruction around the JSON-serialized snippet records
///
/// `snippets_json` is embedded verbatim.
pub fn build_system_prompt(snippets_json: &str) -> String {
    format!(
        "Generate a detailed and concise response with a maximum of {max_words} words \
         using only the provided structured snippets: {snippets_json}. \
         If the user's query is a question, provide a direct answer in the first paragraph \
         based on the structured snippets. \
         Then, expand with relevant details using clear, well-structured paragraphs with \
         headings and appropriate spacing. \
         Do not include any commentary, introduction, or conclusion. \
         The response should be in the same language as the user's query. \
         If there are conflicting pieces of information, identify the discrepancies and either \
         clarify them or provide the most accurate and coherent response possible. \
         Ensure there are no contradictions in the response.",
        max_words = MAX_ANSWER_WORDS,
    )
}
