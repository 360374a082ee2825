// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexError;
use crate::span::{context_snippet, diagnostic_context, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors.
///
/// Parsing stops at the first error. Every variant except
/// [`ParseError::NoValidInput`] carries a span into the original line; use
/// [`ParseError::context`] or [`ParseError::diagnostic`] to render it.
///
/// # Examples
///
/// ```
/// use cmdl_syntax::{Parser, ParseError};
///
/// let err = Parser::parse("cmd 1 a=2 3").unwrap_err();
/// assert!(matches!(err, ParseError::PositionalAfterKeyword { .. }));
///
/// let err = Parser::parse("   ").unwrap_err();
/// assert_eq!(err, ParseError::NoValidInput);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line could not be tokenized. The lexer error is passed through
    /// unchanged.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Empty or whitespace-only input.
    #[error("no valid input was received")]
    NoValidInput,

    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        /// Description of what was expected.
        expected: String,
        found: TokenKind,
        span: Span,
    },

    /// Tokens ran out inside an open composite or after `=` / `:`.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        expected: String,
        /// Zero-width span at the end of the line.
        span: Span,
    },

    /// A positional argument appeared after a keyword argument.
    #[error("positional argument follows keyword argument at position {}", span.start)]
    PositionalAfterKeyword { span: Span },

    /// An integer literal does not fit in 64 bits.
    #[error("integer literal out of range at position {}", span.start)]
    IntegerOutOfRange { span: Span },

    /// A float literal too large to represent as a finite 64-bit float.
    #[error("float literal out of range at position {}", span.start)]
    FloatOutOfRange { span: Span },

    /// Composite literals nested deeper than the configured limit.
    #[error("composite literals nested deeper than {limit} levels at position {}", span.start)]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Get the span associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(e) => Some(e.span()),
            ParseError::NoValidInput => None,
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEndOfInput { span, .. }
            | ParseError::PositionalAfterKeyword { span }
            | ParseError::IntegerOutOfRange { span }
            | ParseError::FloatOutOfRange { span }
            | ParseError::NestingTooDeep { span, .. } => Some(*span),
        }
    }

    /// The input around the error with carets under the offending span, or
    /// `None` when the error has no location.
    ///
    /// ```text
    /// cmd 1 a=2 3
    ///           ^
    /// ```
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(context_snippet(input, self.span()?, context_chars))
    }

    /// Generate a rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}
