// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query intake gate

use std::io::{self, BufRead};

/// Decision taken on a submitted query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intake {
    /// Exactly-empty input: stop silently, make no calls
    Halt,
    /// Anything else, passed on untouched
    Run(String),
}

impl Intake {
    /// Only the exact empty string halts; whitespace-only queries run
    pub fn from_query(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.is_empty() {
            Intake::Halt
        } else {
            Intake::Run(query)
        }
    }

    /// Read one line and gate it
    ///
    /// The line terminator (`\n` or `\r\n`) is removed; nothing else is trimmed.
    /// End of input counts as an empty query.
    pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Self> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Ok(Self::from_query(strip_line_ending(line)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
