//! Test helpers for behavioral specifications.
//!
//! Shorthand constructors for expected values.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use cmdl_registry::{CommandSpec, DispatchError, Outcome, Registry, RegistryError};
pub use cmdl_syntax::{Invocation, LexError, ParseError, Parser, Span, Value};

pub fn int(n: i64) -> Value {
    Value::Integer(n)
}

pub fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

pub fn dict(pairs: &[(&str, Value)]) -> Value {
    Value::Dict(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

/// Keys of a dict value, in order.
pub fn keys(value: &Value) -> Vec<&str> {
    match value {
        Value::Dict(map) => map.keys().map(String::as_str).collect(),
        other => panic!("expected dict, got {other:?}"),
    }
}

/// Parse a line that must be valid.
pub fn parse(line: &str) -> Invocation {
    Parser::parse(line).unwrap_or_else(|e| panic!("{line:?} should parse: {e}"))
}
