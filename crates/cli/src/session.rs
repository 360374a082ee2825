// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line loop: parse, dispatch, render.

use crate::output::{self, OutputFormat};
use cmdl_registry::{Outcome, Registry};
use cmdl_syntax::{Lexer, Parser, ParserConfig};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// What happened to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Ok,
    /// An error was reported for the line.
    Failed,
    /// The line ran `exit`.
    Exit,
}

pub struct Session {
    registry: Registry,
    parser: ParserConfig,
    format: OutputFormat,
    /// Print tokens instead of dispatching.
    show_tokens: bool,
}

impl Session {
    pub fn new(registry: Registry, parser: ParserConfig, format: OutputFormat) -> Self {
        Self {
            registry,
            parser,
            format,
            show_tokens: false,
        }
    }

    pub fn show_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }

    /// Handle a single line. Errors in the line are written to `out`; only
    /// write failures are returned as `Err`.
    pub fn run_line(&self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        if self.show_tokens {
            return self.print_tokens(line, out);
        }

        let invocation = match Parser::parse_with_config(line, &self.parser) {
            Ok(invocation) => invocation,
            Err(err) => {
                debug!(error = %err, "rejected line");
                output::write_error(out, self.format, line, &err.to_string(), err.span())?;
                return Ok(Flow::Failed);
            }
        };

        match self.registry.dispatch(&invocation) {
            Ok(Outcome::Exit) => {
                debug!("exit requested");
                Ok(Flow::Exit)
            }
            Ok(outcome) => {
                output::write_outcome(out, self.format, &invocation.command, &outcome)?;
                Ok(Flow::Ok)
            }
            Err(err) => {
                debug!(error = %err, "command failed");
                output::write_error(out, self.format, line, &err.to_string(), err.span())?;
                Ok(Flow::Failed)
            }
        }
    }

    fn print_tokens(&self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match Lexer::tokenize(line) {
            Ok(tokens) => {
                output::write_tokens(out, self.format, &tokens)?;
                Ok(Flow::Ok)
            }
            Err(err) => {
                output::write_error(out, self.format, line, &err.to_string(), Some(err.span()))?;
                Ok(Flow::Failed)
            }
        }
    }

    /// Read lines until end of input or `exit`. Blank lines are skipped.
    ///
    /// `prompt` is written before each read when given.
    pub fn run(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: Option<&str>,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                if prompt.is_some() {
                    writeln!(out)?;
                }
                return Ok(());
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if self.run_line(&line, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }
}
