// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser that turns a command line into an [`Invocation`].

mod values;

use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::value::{Invocation, Value};

/// Default limit on composite literal nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of lists, tuples and dictionaries. Opening a
    /// composite beyond this fails with [`ParseError::NestingTooDeep`].
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Command-line parser.
///
/// Grammar:
///
/// ```text
/// invocation := IDENT (SPACE argument)*
/// argument   := IDENT '=' value          -- keyword pair
///             | value                    -- positional, only before any keyword pair
/// value      := '[' items? ']'           -- list
///             | '(' items? ')'           -- tuple
///             | '{' pairs? '}'           -- dictionary
///             | STRING | INT | FLOAT | BOOL | NULL | IDENT
/// items      := value (',' value)* ','?
/// pairs      := (IDENT | STRING) ':' value (',' (IDENT | STRING) ':' value)* ','?
/// ```
///
/// Top-level arguments are separated by whitespace, which the lexer records
/// as adjacency flags. Inside an argument whitespace is insignificant. A bare
/// identifier is an unquoted string.
///
/// # Examples
///
/// ```
/// use cmdl_syntax::{Parser, Value};
///
/// let inv = Parser::parse("add 1 2 scale=1.5")?;
/// assert_eq!(inv.command, "add");
/// assert_eq!(inv.positional, vec![Value::Integer(1), Value::Integer(2)]);
/// assert_eq!(inv.keyword["scale"], Value::Float(1.5));
/// # Ok::<(), cmdl_syntax::ParseError>(())
/// ```
pub struct Parser {
    /// The tokens to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Length of the original input, for end-of-input spans.
    input_len: usize,
    /// Current composite nesting level.
    depth: usize,
    max_depth: usize,
    /// Set by the first keyword pair and never cleared.
    kwargs_started: bool,
}

impl Parser {
    /// Parse one command line with the default configuration.
    pub fn parse(input: &str) -> Result<Invocation, ParseError> {
        Self::parse_with_config(input, &ParserConfig::default())
    }

    /// Parse one command line.
    ///
    /// Empty or whitespace-only input fails with
    /// [`ParseError::NoValidInput`] before the lexer runs. Lexer errors are
    /// returned as [`ParseError::Lex`].
    pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<Invocation, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::NoValidInput);
        }

        let tokens = Lexer::tokenize(input)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            input_len: input.len(),
            depth: 0,
            max_depth: config.max_depth,
            kwargs_started: false,
        };
        let invocation = parser.parse_invocation()?;

        tracing::debug!(
            command = %invocation.command,
            positional = invocation.positional.len(),
            keyword = invocation.keyword.len(),
            "parsed invocation"
        );
        Ok(invocation)
    }

    /// invocation := IDENT (SPACE argument)*
    fn parse_invocation(&mut self) -> Result<Invocation, ParseError> {
        let (name, name_span) = match self.peek() {
            Some(token) if token.kind == TokenKind::Identifier => {
                (token.value.clone(), token.span)
            }
            _ => return Err(self.unexpected_token("command name")),
        };
        self.advance();

        let mut invocation = Invocation::new(name, name_span);

        while let Some(token) = self.peek() {
            if !token.space_before {
                return Err(self.unexpected_token("whitespace before argument"));
            }
            let start = token.span;

            if self.at_keyword_pair() {
                let (key, value) = self.parse_keyword_pair()?;
                self.kwargs_started = true;
                invocation.keyword.insert(key, value);
            } else if self.kwargs_started {
                return Err(ParseError::PositionalAfterKeyword { span: start });
            } else {
                let value = self.parse_value()?;
                invocation.positional.push(value);
            }
        }

        Ok(invocation)
    }

    /// True when the current token is an identifier whose next token is `=`.
    ///
    /// Whitespace is not a token, so `a=1` and `a = 1` both qualify.
    fn at_keyword_pair(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Identifier))
            && matches!(
                self.tokens.get(self.pos + 1).map(|t| t.kind),
                Some(TokenKind::Equals)
            )
    }

    /// keyword := IDENT '=' value
    fn parse_keyword_pair(&mut self) -> Result<(String, Value), ParseError> {
        let key = self
            .peek()
            .map(|t| t.value.clone())
            .ok_or_else(|| self.unexpected_token("keyword name"))?;
        self.advance();
        self.expect(TokenKind::Equals, "'='")?;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    /// Peek at the current token without consuming it.
    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Peek at the kind of the current token.
    #[inline]
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Advance to the next token, returning the one consumed.
    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected_token(expected))
        }
    }

    /// Error for the current token, or for end of input if there is none.
    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                span: token.span,
            },
            None => ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
                span: Span::empty(self.input_len),
            },
        }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
