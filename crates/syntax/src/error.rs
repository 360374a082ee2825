// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Errors raised while splitting a line into tokens.
///
/// The lexer stops at the first error; no partial token list is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A quote was opened but never closed, or the line ended right after a
    /// backslash. The span points at the opening quote.
    #[error("unterminated string literal starting at position {}", span.start)]
    UnterminatedString { span: Span },

    /// A number contained a second decimal point. The span runs from the
    /// start of the number through the offending `.`.
    #[error("invalid float literal at position {}: more than one decimal point", span.start)]
    InvalidFloat { span: Span },

    /// A character that starts no token.
    #[error("unexpected character {found:?} at position {}", span.start)]
    UnexpectedCharacter { found: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::InvalidFloat { span }
            | LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    /// The input around the error with a caret marker underneath.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }
}
