// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser unit tests.

mod composites;
mod errors;
mod keywords;
mod literals;

use super::*;
use crate::value::Dict;

fn parse(input: &str) -> Invocation {
    Parser::parse(input).unwrap()
}

fn parse_err(input: &str) -> ParseError {
    Parser::parse(input).unwrap_err()
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

fn tuple(items: Vec<Value>) -> Value {
    Value::Tuple(items)
}

fn dict(pairs: Vec<(&str, Value)>) -> Value {
    Value::Dict(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn kwargs(pairs: Vec<(&str, Value)>) -> Dict {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}
