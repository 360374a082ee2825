// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword arguments.
//!
//! An identifier immediately followed by `=` starts a keyword pair. The
//! first pair switches the parser into keyword mode for the rest of the
//! line; any later positional argument is an error.

use super::*;

#[test]
fn keywords_only() {
    let inv = parse("add a=1 b=2");
    assert_eq!(inv.command, "add");
    assert!(inv.positional.is_empty());
    assert_eq!(inv.keyword, kwargs(vec![("a", int(1)), ("b", int(2))]));
}

#[test]
fn positionals_then_keywords() {
    let inv = parse("cmd 1 2 3 a=4 b=5");
    assert_eq!(inv.positional, vec![int(1), int(2), int(3)]);
    assert_eq!(inv.keyword, kwargs(vec![("a", int(4)), ("b", int(5))]));
}

#[test]
fn keyword_with_dict_value() {
    let inv = parse("set k={a: 1, b: [2, 3]}");
    assert_eq!(inv.command, "set");
    assert!(inv.positional.is_empty());
    assert_eq!(
        inv.keyword,
        kwargs(vec![(
            "k",
            dict(vec![("a", int(1)), ("b", list(vec![int(2), int(3)]))])
        )])
    );
}

#[test]
fn keyword_values_of_every_kind() {
    let inv = parse("cmd s='x' i=1 f=.5 b=False n=None w=word l=[1] t=(1,) d={}");
    let keys: Vec<&str> = inv.keyword.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["s", "i", "f", "b", "n", "w", "l", "t", "d"]);
    assert_eq!(inv.keyword["f"], Value::Float(0.5));
    assert_eq!(inv.keyword["n"], Value::Null);
    assert_eq!(inv.keyword["w"], string("word"));
}

#[test]
fn spaces_around_equals_still_make_a_keyword() {
    let inv = parse("cmd a = 1 b= 2 c =3");
    assert!(inv.positional.is_empty());
    assert_eq!(
        inv.keyword,
        kwargs(vec![("a", int(1)), ("b", int(2)), ("c", int(3))])
    );
}

#[test]
fn repeated_keyword_takes_last_value() {
    let inv = parse("cmd a=1 b=2 a=3");
    assert_eq!(inv.keyword, kwargs(vec![("a", int(3)), ("b", int(2))]));
}

#[test]
fn identifier_without_equals_is_positional() {
    let inv = parse("cmd a b=1");
    assert_eq!(inv.positional, vec![string("a")]);
    assert_eq!(inv.keyword, kwargs(vec![("b", int(1))]));
}

#[test]
fn quoted_name_is_not_a_keyword() {
    let err = parse_err("cmd 'a'=1");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
}

#[test]
fn keyword_named_like_a_literal_is_rejected() {
    // `True` lexes as a boolean, so `True=1` is a boolean followed by `=`.
    let err = parse_err("cmd True=1");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
}

// =============================================================================
// Positional after keyword
// =============================================================================

#[test]
fn positional_after_keyword() {
    let err = parse_err("cmd 1 a=2 3");
    assert_eq!(
        err,
        ParseError::PositionalAfterKeyword {
            span: Span::new(10, 11)
        }
    );
}

#[yare::parameterized(
    bare_word    = { "test a=c d" },
    integer      = { "test a=c d=e 1" },
    float        = { "test a=c d=e 1.0" },
    true_literal = { "test a=c d=e True" },
    none_literal = { "test a=c d=e None" },
    list         = { "test a=c d=e []" },
    dict         = { "test a=c d=e {}" },
    tuple        = { "test a=c d=e ()" },
    string       = { "test a=c d=e ''" },
    malformed    = { "test a=1 [1," },
)]
fn any_positional_after_keyword_fails(input: &str) {
    assert!(matches!(
        parse_err(input),
        ParseError::PositionalAfterKeyword { .. }
    ));
}

#[test]
fn keyword_without_value() {
    let err = parse_err("test a=c d=");
    assert_eq!(
        err,
        ParseError::UnexpectedEndOfInput {
            expected: "value".to_string(),
            span: Span::empty(11),
        }
    );
}

#[test]
fn keyword_value_glued_to_next_token() {
    let err = parse_err("cmd a=1,2");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Comma,
            ..
        }
    ));
}

#[test]
fn chained_equals_is_rejected() {
    let err = parse_err("cmd a=b=c");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
}
