// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use cmdl_registry::Outcome;
use cmdl_syntax::{context_snippet, Span, Token};
use serde::Deserialize;
use std::io::{self, Write};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Characters of input shown on each side of an error position.
const CONTEXT_CHARS: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a command's outcome. JSON output is one object per line.
pub fn write_outcome(
    out: &mut impl Write,
    format: OutputFormat,
    command: &str,
    outcome: &Outcome,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match outcome {
            Outcome::Value(value) => writeln!(out, "{value}"),
            Outcome::Text(text) => writeln!(out, "{text}"),
            Outcome::Unit | Outcome::Exit => Ok(()),
        },
        OutputFormat::Json => {
            let result = match outcome {
                Outcome::Value(value) => serde_json::to_value(value)?,
                Outcome::Text(text) => serde_json::Value::String(text.clone()),
                Outcome::Unit | Outcome::Exit => serde_json::Value::Null,
            };
            let obj = serde_json::json!({
                "command": command,
                "result": result,
            });
            writeln!(out, "{obj}")
        }
    }
}

/// Print an error for `line`, with a caret under `span` in text output.
pub fn write_error(
    out: &mut impl Write,
    format: OutputFormat,
    line: &str,
    message: &str,
    span: Option<Span>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "error: {message}")?;
            if let Some(span) = span {
                writeln!(out, "{}", context_snippet(line, span, CONTEXT_CHARS))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "error": message,
                "span": span.map(|s| [s.start, s.end]),
            });
            writeln!(out, "{obj}")
        }
    }
}

/// Print a token stream, one token per line in text output.
pub fn write_tokens(out: &mut impl Write, format: OutputFormat, tokens: &[Token]) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tokens)?;
            writeln!(out)
        }
    }
}
