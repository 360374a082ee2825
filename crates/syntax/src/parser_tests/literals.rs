// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar arguments and invocation shape.

use super::*;

#[test]
fn bare_command() {
    let inv = parse("greet");
    assert_eq!(inv.command, "greet");
    assert_eq!(inv.command_span, Span::new(0, 5));
    assert!(inv.positional.is_empty());
    assert!(inv.keyword.is_empty());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let inv = parse("   greet   ");
    assert_eq!(inv.command, "greet");
    assert_eq!(inv.command_span, Span::new(3, 8));
    assert_eq!(inv.arg_count(), 0);
}

#[test]
fn integer_arguments() {
    let inv = parse("add 1 2");
    assert_eq!(inv.command, "add");
    assert_eq!(inv.positional, vec![int(1), int(2)]);
    assert!(inv.keyword.is_empty());
}

#[yare::parameterized(
    integer       = { "cmd 42", Value::Integer(42) },
    leading_zero  = { "cmd 007", Value::Integer(7) },
    max_integer   = { "cmd 9223372036854775807", Value::Integer(i64::MAX) },
    float         = { "cmd 1.5", Value::Float(1.5) },
    leading_dot   = { "cmd .25", Value::Float(0.25) },
    trailing_dot  = { "cmd 3.", Value::Float(3.0) },
    true_literal  = { "cmd True", Value::Boolean(true) },
    false_literal = { "cmd False", Value::Boolean(false) },
    none_literal  = { "cmd None", Value::Null },
    single_quoted = { "cmd 'hello world'", Value::String("hello world".into()) },
    double_quoted = { "cmd \"hello\"", Value::String("hello".into()) },
    empty_single  = { "cmd ''", Value::String(String::new()) },
    empty_double  = { "cmd \"\"", Value::String(String::new()) },
    bare_word     = { "cmd hello", Value::String("hello".into()) },
    lowercase_kw  = { "cmd none", Value::String("none".into()) },
    quoted_kw     = { "cmd 'True'", Value::String("True".into()) },
)]
fn single_positional(input: &str, expected: Value) {
    let inv = parse(input);
    assert_eq!(inv.command, "cmd");
    assert_eq!(inv.positional, vec![expected]);
    assert!(inv.keyword.is_empty());
}

#[test]
fn many_positionals_keep_order() {
    let inv = parse("cmd 1 2 3 4 5");
    assert_eq!(inv.positional, (1..=5).map(int).collect::<Vec<_>>());
}

#[test]
fn mixed_scalars() {
    let inv = parse("cmd 'a' 2 3.0 True None b");
    assert_eq!(
        inv.positional,
        vec![
            string("a"),
            int(2),
            Value::Float(3.0),
            Value::Boolean(true),
            Value::Null,
            string("b"),
        ]
    );
}

#[test]
fn escaped_string_argument() {
    let inv = parse(r#"say "she said \"hi\"""#);
    assert_eq!(inv.positional, vec![string(r#"she said "hi""#)]);
}

#[test]
fn command_name_may_contain_digits_and_underscores() {
    assert_eq!(parse("load_v2 x").command, "load_v2");
}

#[test]
fn fresh_parser_per_line() {
    let first = parse("cmd a=1");
    let second = parse("cmd 2");
    assert_eq!(first.keyword.len(), 1);
    assert_eq!(second.positional, vec![int(2)]);
}
