// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lists, tuples and dictionaries.

use super::*;

#[test]
fn list_argument() {
    let inv = parse("echo [1, 2, 3]");
    assert_eq!(inv.positional, vec![list(vec![int(1), int(2), int(3)])]);
}

#[yare::parameterized(
    empty_list  = { "cmd []", Value::List(vec![]) },
    empty_tuple = { "cmd ()", Value::Tuple(vec![]) },
    empty_dict  = { "cmd {}", Value::Dict(Dict::new()) },
    spaced_list = { "cmd [ ]", Value::List(vec![]) },
)]
fn empty_composites(input: &str, expected: Value) {
    assert_eq!(parse(input).positional, vec![expected]);
}

#[test]
fn single_element_tuple() {
    assert_eq!(parse("cmd (1)").positional, vec![tuple(vec![int(1)])]);
    assert_eq!(parse("cmd (1,)").positional, vec![tuple(vec![int(1)])]);
}

#[test]
fn trailing_commas() {
    let inv = parse("cmd [1, 2,] (3,) {a: 4,}");
    assert_eq!(
        inv.positional,
        vec![
            list(vec![int(1), int(2)]),
            tuple(vec![int(3)]),
            dict(vec![("a", int(4))]),
        ]
    );
}

#[test]
fn whitespace_inside_composites_is_free() {
    let tight = parse("cmd [1,2,(3,4)]");
    let loose = parse("cmd [ 1 ,  2 , ( 3 , 4 ) ]");
    assert_eq!(tight.positional, loose.positional);
}

#[test]
fn mixed_list() {
    let inv = parse("cmd [1, 'two', 3.0, True, None, four]");
    assert_eq!(
        inv.positional,
        vec![list(vec![
            int(1),
            string("two"),
            Value::Float(3.0),
            Value::Boolean(true),
            Value::Null,
            string("four"),
        ])]
    );
}

#[test]
fn nested_lists() {
    let inv = parse("cmd [[], [], [[]]]");
    assert_eq!(
        inv.positional,
        vec![list(vec![list(vec![]), list(vec![]), list(vec![list(vec![])])])]
    );
}

#[test]
fn nested_tuples() {
    let inv = parse("cmd ((), (), (), (), ())");
    assert_eq!(inv.positional, vec![tuple(vec![tuple(vec![]); 5])]);
}

#[test]
fn dict_with_identifier_and_string_keys() {
    let inv = parse("cmd {a: 1, 'b c': 2, \"d\": [3]}");
    assert_eq!(
        inv.positional,
        vec![dict(vec![
            ("a", int(1)),
            ("b c", int(2)),
            ("d", list(vec![int(3)])),
        ])]
    );
}

#[test]
fn nested_dicts() {
    let inv = parse("cmd {a:{}, b:{}, c:{d: {e: 56}}}");
    assert_eq!(
        inv.positional,
        vec![dict(vec![
            ("a", dict(vec![])),
            ("b", dict(vec![])),
            ("c", dict(vec![("d", dict(vec![("e", int(56))]))])),
        ])]
    );
}

#[test]
fn dict_preserves_insertion_order() {
    let inv = parse("cmd {z: 1, a: 2, m: 3}");
    let Value::Dict(map) = &inv.positional[0] else {
        panic!("expected dict, got {:?}", inv.positional[0]);
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn duplicate_dict_key_keeps_first_position_last_value() {
    let inv = parse("cmd {a: 1, b: 2, a: 3}");
    assert_eq!(inv.positional, vec![dict(vec![("a", int(3)), ("b", int(2))])]);
    let Value::Dict(map) = &inv.positional[0] else {
        panic!("expected dict");
    };
    assert_eq!(map.get_index(0).map(|(k, _)| k.as_str()), Some("a"));
}

#[test]
fn dict_values_take_bare_identifiers() {
    let inv = parse("cmd {mode: fast}");
    assert_eq!(inv.positional, vec![dict(vec![("mode", string("fast"))])]);
}

#[test]
fn identifier_followed_by_equals_inside_list_is_an_error() {
    let err = parse_err("cmd [a=1]");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        }
    ));
}

#[test]
fn several_composite_positionals() {
    let inv = parse("cmd [1] (2,) {c: 3}");
    assert_eq!(inv.positional.len(), 3);
}

#[yare::parameterized(
    scalar      = { "cmd 1", 0 },
    flat_list   = { "cmd [1, 2]", 1 },
    empty_list  = { "cmd []", 1 },
    two_levels  = { "cmd [(1,), 2]", 2 },
    dict_list   = { "cmd {a: [1, {b: ()}]}", 4 },
    lopsided    = { "cmd [[[[]]], 1, []]", 4 },
)]
fn depth_is_preserved(input: &str, depth: usize) {
    assert_eq!(parse(input).positional[0].depth(), depth);
}

// =============================================================================
// Nesting limit
// =============================================================================

fn nested(depth: usize) -> String {
    format!("cmd {}{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn default_limit_allows_max_depth() {
    let inv = parse(&nested(DEFAULT_MAX_DEPTH));
    assert_eq!(inv.positional[0].depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn default_limit_rejects_deeper() {
    let err = parse_err(&nested(DEFAULT_MAX_DEPTH + 1));
    let opener = 4 + DEFAULT_MAX_DEPTH;
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH,
            span: Span::new(opener, opener + 1),
        }
    );
}

#[test]
fn custom_limit() {
    let config = ParserConfig { max_depth: 2 };
    assert!(Parser::parse_with_config("cmd [[1]]", &config).is_ok());
    assert!(Parser::parse_with_config("cmd {a: [1]}", &config).is_ok());
    let err = Parser::parse_with_config("cmd [{a: (1,)}]", &config).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 2, .. }));
}

#[test]
fn adversarial_depth_does_not_overflow_the_stack() {
    let err = parse_err(&nested(100_000));
    assert!(matches!(err, ParseError::NestingTooDeep { .. }));
}
