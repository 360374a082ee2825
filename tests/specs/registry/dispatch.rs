//! Registry specs
//!
//! Parsed lines dispatched against declared command schemas.

use crate::prelude::*;

fn registry() -> Registry {
    let mut registry = Registry::default();
    registry
        .register(
            CommandSpec::new("add")
                .alias("sum")
                .describe("adds integers")
                .param("a")
                .param("b"),
            |args| {
                let total: i64 = ["a", "b"]
                    .iter()
                    .filter_map(|name| args.get(name).and_then(Value::as_i64))
                    .sum();
                Ok(Outcome::Value(Value::Integer(total)))
            },
        )
        .unwrap();
    registry
        .register(
            CommandSpec::new("set").param("name").keywords(),
            |args| Ok(Outcome::Value(Value::Dict(args.extra.clone()))),
        )
        .unwrap();
    registry
}

fn run(registry: &Registry, line: &str) -> Result<Outcome, DispatchError> {
    registry.dispatch(&parse(line))
}

#[test]
fn positional_and_keyword_calls_agree() {
    let registry = registry();
    let by_position = run(&registry, "add 1 2").unwrap();
    let by_keyword = run(&registry, "sum b=2 a=1").unwrap();
    assert_eq!(by_position, Outcome::Value(int(3)));
    assert_eq!(by_position, by_keyword);
}

#[test]
fn extra_keywords_reach_handler() {
    let registry = registry();
    let outcome = run(&registry, "set cfg k={a: 1, b: [2, 3]}").unwrap();
    assert_eq!(
        outcome,
        Outcome::Value(dict(&[(
            "k",
            dict(&[("a", int(1)), ("b", list(vec![int(2), int(3)]))])
        )]))
    );
}

#[test]
fn duplicate_alias_rejected() {
    let mut registry = registry();
    let err = registry
        .register(CommandSpec::new("total").alias("sum"), |_| Ok(Outcome::Unit))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateName {
            name: "sum".into(),
            existing: "add".into(),
        }
    );
}

#[yare::parameterized(
    missing  = { "add 1", "add: missing required argument: <b>" },
    too_many = { "add 1 2 3", "add: takes 2 positional argument(s) but 3 were given" },
    unknown  = { "add 1 c=2", "add: unexpected keyword argument: c" },
    twice    = { "add 1 2 a=3", "add: got multiple values for argument: a" },
)]
fn arity_errors(line: &str, message: &str) {
    let err = run(&registry(), line).unwrap_err();
    assert!(matches!(err, DispatchError::Arguments { .. }));
    assert_eq!(err.to_string(), message);
}

#[test]
fn unknown_command_span_points_at_name() {
    let line = "  nope 1";
    let err = run(&registry(), line).unwrap_err();
    let span = err.span().unwrap();
    assert_eq!(span.slice(line), "nope");
}

#[test]
fn help_lists_every_command_once() {
    let registry = registry();
    let Outcome::Text(help) = run(&registry, "help").unwrap() else {
        panic!("help should return text");
    };
    assert!(help.starts_with("List of available commands:\n"));
    for name in ["help", "names", "exit", "add", "set"] {
        assert_eq!(
            help.matches(&format!("| {name}: ")).count(),
            1,
            "{name} should appear once in:\n{help}"
        );
    }
    assert!(!help.contains("| sum: "), "aliases are not listed separately");
}

#[test]
fn help_for_alias_shows_all_names() {
    let Outcome::Text(help) = run(&registry(), "info sum").unwrap() else {
        panic!("help should return text");
    };
    assert!(help.ends_with("| names: add, sum"));
}

#[test]
fn exit() {
    assert_eq!(run(&registry(), "exit").unwrap(), Outcome::Exit);
}
