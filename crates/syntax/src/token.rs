// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A name such as `greet` or `max_count`.
    Identifier,
    /// `'text'` or `"text"`; the token value holds the unescaped contents.
    StringLiteral,
    IntegerLiteral,
    /// Digits with a single `.`, including `.5` and `5.`.
    FloatLiteral,
    /// `True` or `False`.
    BooleanLiteral,
    /// `None`.
    NullLiteral,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    Colon,
    Equals,
}

impl TokenKind {
    /// Map a single delimiter character to its kind.
    pub fn delimiter(c: char) -> Option<TokenKind> {
        Some(match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            _ => return None,
        })
    }

    /// Reclassify reserved words; everything else stays an identifier.
    pub fn keyword(word: &str) -> TokenKind {
        match word {
            "True" | "False" => TokenKind::BooleanLiteral,
            "None" => TokenKind::NullLiteral,
            _ => TokenKind::Identifier,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::NullLiteral => "None",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Equals => "'='",
        };
        f.write_str(s)
    }
}

/// A token with its lexeme, source location and whitespace adjacency.
///
/// Whitespace never becomes a token. The adjacency flags are the only record
/// of it, and the parser uses them to find where top-level arguments begin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub space_before: bool,
    pub space_after: bool,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
            space_before: false,
            space_after: false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {}", self.kind, self.value, self.span)
    }
}
