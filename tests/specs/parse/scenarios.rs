//! Parsing specs
//!
//! Whole lines in, invocations out.

use crate::prelude::*;

#[test]
fn bare_command() {
    let inv = parse("greet");
    assert_eq!(inv.command, "greet");
    assert!(inv.positional.is_empty());
    assert!(inv.keyword.is_empty());
}

#[test]
fn positional_integers() {
    let inv = parse("add 1 2");
    assert_eq!(inv.command, "add");
    assert_eq!(inv.positional, vec![int(1), int(2)]);
    assert!(inv.keyword.is_empty());
}

#[test]
fn keyword_integers() {
    let inv = parse("add a=1 b=2");
    assert!(inv.positional.is_empty());
    let names: Vec<&str> = inv.keyword.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(inv.keyword["a"], int(1));
    assert_eq!(inv.keyword["b"], int(2));
}

#[test]
fn list_argument() {
    let inv = parse("echo [1, 2, 3]");
    assert_eq!(inv.positional, vec![list(vec![int(1), int(2), int(3)])]);
}

#[test]
fn dict_bound_to_keyword() {
    let inv = parse("set k={a: 1, b: [2, 3]}");
    assert!(inv.positional.is_empty());
    let k = &inv.keyword["k"];
    assert_eq!(
        *k,
        dict(&[("a", int(1)), ("b", list(vec![int(2), int(3)]))])
    );
    assert_eq!(keys(k), vec!["a", "b"]);
}

#[test]
fn mixed_literals() {
    let inv = parse(r#"run "a \"b\"" .5 7. True False None name"#);
    similar_asserts::assert_eq!(
        inv.positional,
        vec![
            string("a \"b\""),
            Value::Float(0.5),
            Value::Float(7.0),
            Value::Boolean(true),
            Value::Boolean(false),
            Value::Null,
            string("name"),
        ]
    );
}

#[test]
fn nested_composites_keep_shape() {
    let inv = parse("cfg [(1,), {'x y': [[]]}, ()]");
    let value = &inv.positional[0];
    assert_eq!(value.depth(), 4);
    assert_eq!(value.to_string(), "[(1,), {'x y': [[]]}, ()]");
}

#[test]
fn rendered_values_parse_back() {
    for line in [
        "show [1, 'two', 3.5, None]",
        "show {'a': (True,), 'b': {}}",
        "show 'it\\'s'",
    ] {
        let first = parse(line);
        let rendered = format!("show {}", first.positional[0]);
        assert_eq!(parse(&rendered), first, "{rendered}");
    }

    let huge = format!("show {}.5", "9".repeat(300));
    let first = parse(&huge);
    let rendered = format!("show {}", first.positional[0]);
    assert_eq!(parse(&rendered), first, "{rendered}");
}

#[test]
fn float_overflow_is_rejected() {
    let line = format!("show {}.", "9".repeat(400));
    let err = Parser::parse(&line).unwrap_err();
    assert_eq!(
        err,
        ParseError::FloatOutOfRange {
            span: Span::new(5, line.len())
        }
    );
}
