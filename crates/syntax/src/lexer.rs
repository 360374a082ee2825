// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass lexer for command lines.

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits one line of input into [`Token`]s.
///
/// Whitespace is not emitted. It sets `space_after` on the token before it,
/// and `space_before` on the token after it.
///
/// # Examples
///
/// ```
/// use cmdl_syntax::{Lexer, TokenKind};
///
/// let tokens = Lexer::tokenize("add 1 x=2.5")?;
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Identifier,
///         TokenKind::IntegerLiteral,
///         TokenKind::Identifier,
///         TokenKind::Equals,
///         TokenKind::FloatLiteral,
///     ]
/// );
/// assert!(tokens[1].space_before);
/// assert!(!tokens[3].space_before);
/// # Ok::<(), cmdl_syntax::LexError>(())
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Tokenize `input`, failing on the first lexical error.
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer {
            input,
            chars: input.char_indices().peekable(),
            tokens: Vec::new(),
        };
        lexer.run()?;
        Ok(lexer.tokens)
    }

    fn run(&mut self) -> Result<(), LexError> {
        while let Some(&(pos, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
                if let Some(last) = self.tokens.last_mut() {
                    last.space_after = true;
                }
                continue;
            }

            let token = if c.is_alphabetic() {
                self.lex_identifier(pos)
            } else if c == '\'' || c == '"' {
                self.lex_string(pos, c)?
            } else if c.is_ascii_digit() || c == '.' {
                self.lex_number(pos)?
            } else if let Some(kind) = TokenKind::delimiter(c) {
                self.chars.next();
                Token::new(kind, c, Span::new(pos, pos + c.len_utf8()))
            } else {
                return Err(LexError::UnexpectedCharacter {
                    found: c,
                    span: Span::new(pos, pos + c.len_utf8()),
                });
            };
            self.push(token);
        }
        Ok(())
    }

    fn push(&mut self, mut token: Token) {
        token.space_before = self.input[..token.span.start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        tracing::trace!(kind = ?token.kind, value = %token.value, span = %token.span, "token");
        self.tokens.push(token);
    }

    /// Identifier or reserved word: a letter, then letters, digits or `_`.
    fn lex_identifier(&mut self, start: usize) -> Token {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }
        let word = &self.input[start..end];
        Token::new(TokenKind::keyword(word), word, Span::new(start, end))
    }

    /// Quoted string. The value is the contents with escapes resolved.
    fn lex_string(&mut self, start: usize, quote: char) -> Result<Token, LexError> {
        let unterminated = LexError::UnterminatedString {
            span: Span::new(start, start + quote.len_utf8()),
        };
        self.chars.next();

        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => return Err(unterminated),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => return Err(unterminated),
                },
                Some((i, c)) if c == quote => {
                    let end = i + c.len_utf8();
                    return Ok(Token::new(
                        TokenKind::StringLiteral,
                        value,
                        Span::new(start, end),
                    ));
                }
                Some((_, c)) => value.push(c),
            }
        }
    }

    /// Integer or float. Leading (`.5`) and trailing (`5.`) dots are floats.
    fn lex_number(&mut self, start: usize) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        while let Some(&(i, c)) = self.chars.peek() {
            match c {
                '0'..='9' => lexeme.push(c),
                '.' if lexeme.contains('.') => {
                    return Err(LexError::InvalidFloat {
                        span: Span::new(start, i + 1),
                    });
                }
                '.' => lexeme.push(c),
                _ => break,
            }
            self.chars.next();
        }

        if lexeme == "." {
            return Err(LexError::UnexpectedCharacter {
                found: '.',
                span: Span::new(start, start + 1),
            });
        }

        let kind = if lexeme.contains('.') {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        let span = Span::new(start, start + lexeme.len());
        Ok(Token::new(kind, lexeme, span))
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
