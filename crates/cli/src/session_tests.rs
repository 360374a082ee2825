// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::commands;

fn session(format: OutputFormat) -> Session {
    Session::new(
        commands::registry(false).unwrap(),
        ParserConfig::default(),
        format,
    )
}

fn run_line(session: &Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.run_line(line, &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

fn run_all(session: &Session, input: &str, prompt: Option<&str>) -> String {
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out, prompt).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn line_ok() {
    let (flow, out) = run_line(&session(OutputFormat::Text), "type [1]");
    assert_eq!(flow, Flow::Ok);
    assert_eq!(out, "list\n");
}

#[test]
fn parse_error_reported_with_caret() {
    let (flow, out) = run_line(&session(OutputFormat::Text), "echo a=1 2");
    assert_eq!(flow, Flow::Failed);
    similar_asserts::assert_eq!(
        out,
        "error: positional argument follows keyword argument at position 9\n\
         echo a=1 2\n\
         \x20        ^\n"
    );
}

#[test]
fn unknown_command_reported_with_caret() {
    let (flow, out) = run_line(&session(OutputFormat::Text), "frob 1");
    assert_eq!(flow, Flow::Failed);
    assert_eq!(out, "error: frob is not a command\nfrob 1\n^^^^\n");
}

#[test]
fn argument_error_has_no_caret() {
    let (flow, out) = run_line(&session(OutputFormat::Text), "type");
    assert_eq!(flow, Flow::Failed);
    assert_eq!(out, "error: type: missing required argument: <value>\n");
}

#[test]
fn exit_stops() {
    let (flow, out) = run_line(&session(OutputFormat::Text), "exit");
    assert_eq!(flow, Flow::Exit);
    assert!(out.is_empty());
}

#[test]
fn json_lines() {
    let session = session(OutputFormat::Json);
    let (_, out) = run_line(&session, "type 'x'");
    assert_eq!(out, "{\"command\":\"type\",\"result\":\"str\"}\n");

    let (_, out) = run_line(&session, "type (");
    assert_eq!(
        out,
        "{\"error\":\"unexpected end of input, expected value\",\"span\":[6,6]}\n"
    );
}

#[test]
fn tokens_mode() {
    let session = session(OutputFormat::Text).show_tokens(true);
    let (flow, out) = run_line(&session, "exit =");
    assert_eq!(flow, Flow::Ok, "tokens mode never dispatches");
    assert_eq!(out, "Identifier \"exit\" 0..4\nEquals \"=\" 5..6\n");

    let (flow, out) = run_line(&session, "x 'open");
    assert_eq!(flow, Flow::Failed);
    assert!(out.starts_with("error: "));
}

#[test]
fn loop_skips_blank_lines_and_continues_after_errors() {
    let out = run_all(
        &session(OutputFormat::Text),
        "type 1\n\n   \nnope\ntype 'a'\n",
        None,
    );
    assert_eq!(
        out,
        "int\nerror: nope is not a command\nnope\n^^^^\nstr\n"
    );
}

#[test]
fn loop_stops_at_exit() {
    let out = run_all(&session(OutputFormat::Text), "type 1\nexit\ntype 2\n", None);
    assert_eq!(out, "int\n");
}

#[test]
fn loop_prints_prompt() {
    let out = run_all(&session(OutputFormat::Text), "type 1\n", Some("> "));
    assert_eq!(out, "> int\n> \n");
}

#[test]
fn max_depth_applies() {
    let session = Session::new(
        commands::registry(false).unwrap(),
        ParserConfig { max_depth: 2 },
        OutputFormat::Text,
    );
    let (flow, _) = run_line(&session, "type [[1]]");
    assert_eq!(flow, Flow::Ok);
    let (flow, out) = run_line(&session, "type [[[1]]]");
    assert_eq!(flow, Flow::Failed);
    assert!(out.contains("nested deeper than 2 levels"), "got: {out}");
}
