// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Value parsing: literals and nested lists, tuples and dictionaries.

use super::Parser;
use crate::parse_error::ParseError;
use crate::token::TokenKind;
use crate::value::{Dict, Value};

/// Bracket pair for sequence composites.
#[derive(Clone, Copy)]
enum Sequence {
    /// [ ... ] list
    List,
    /// ( ... ) tuple
    Tuple,
}

impl Sequence {
    fn closing_token(self) -> TokenKind {
        match self {
            Sequence::List => TokenKind::CloseBracket,
            Sequence::Tuple => TokenKind::CloseParen,
        }
    }

    fn expected_after_item(self) -> &'static str {
        match self {
            Sequence::List => "',' or ']'",
            Sequence::Tuple => "',' or ')'",
        }
    }
}

impl Parser {
    /// Parse one value, recursing into composites.
    pub(super) fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::OpenBracket) => self.parse_sequence(Sequence::List).map(Value::List),
            Some(TokenKind::OpenParen) => self.parse_sequence(Sequence::Tuple).map(Value::Tuple),
            Some(TokenKind::OpenBrace) => self.parse_dict().map(Value::Dict),
            _ => self.parse_atom(),
        }
    }

    /// '[' items? ']' or '(' items? ')'. Trailing commas are allowed.
    fn parse_sequence(&mut self, kind: Sequence) -> Result<Vec<Value>, ParseError> {
        self.enter_composite()?;
        let close = kind.closing_token();

        let mut items = Vec::new();
        while !self.eat(close) {
            items.push(self.parse_value()?);
            if self.eat(TokenKind::Comma) {
                continue;
            }
            if self.peek_kind() != Some(close) {
                return Err(self.unexpected_token(kind.expected_after_item()));
            }
        }

        self.depth -= 1;
        Ok(items)
    }

    /// '{' (key ':' value (',' key ':' value)* ','?)? '}'
    ///
    /// Keys are identifiers or strings. A repeated key keeps its first
    /// position and takes the last value.
    fn parse_dict(&mut self) -> Result<Dict, ParseError> {
        self.enter_composite()?;

        let mut map = Dict::new();
        while !self.eat(TokenKind::CloseBrace) {
            let key = match self.peek() {
                Some(token)
                    if matches!(
                        token.kind,
                        TokenKind::Identifier | TokenKind::StringLiteral
                    ) =>
                {
                    token.value.clone()
                }
                _ => return Err(self.unexpected_token("dictionary key or '}'")),
            };
            self.advance();
            self.expect(TokenKind::Colon, "':'")?;
            let value = self.parse_value()?;
            map.insert(key, value);

            if self.eat(TokenKind::Comma) {
                continue;
            }
            if self.peek_kind() != Some(TokenKind::CloseBrace) {
                return Err(self.unexpected_token("',' or '}'"));
            }
        }

        self.depth -= 1;
        Ok(map)
    }

    /// Consume an opening delimiter, enforcing the nesting limit.
    fn enter_composite(&mut self) -> Result<(), ParseError> {
        let span = self.peek().map(|t| t.span).unwrap_or_default();
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                span,
            });
        }
        self.depth += 1;
        self.advance();
        Ok(())
    }

    /// A single-token value. Bare identifiers are unquoted strings.
    fn parse_atom(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected_token("value"));
        };

        let value = match token.kind {
            TokenKind::StringLiteral | TokenKind::Identifier => Value::String(token.value.clone()),
            TokenKind::IntegerLiteral => match token.value.parse::<i64>() {
                Ok(n) => Value::Integer(n),
                Err(_) => return Err(ParseError::IntegerOutOfRange { span: token.span }),
            },
            TokenKind::FloatLiteral => match token.value.parse::<f64>() {
                Ok(f) if f.is_finite() => Value::Float(f),
                Ok(_) => return Err(ParseError::FloatOutOfRange { span: token.span }),
                Err(_) => return Err(self.unexpected_token("value")),
            },
            TokenKind::BooleanLiteral => Value::Boolean(token.value == "True"),
            TokenKind::NullLiteral => Value::Null,
            _ => return Err(self.unexpected_token("value")),
        };

        self.advance();
        Ok(value)
    }
}
