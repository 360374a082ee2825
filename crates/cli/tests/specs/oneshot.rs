//! `-c LINE` specs
//!
//! A single line runs and its success decides the exit code.

use crate::prelude::*;

#[test]
fn success_exits_zero() {
    cli()
        .args(&["-c", "echo x=[1, 2]"])
        .passes()
        .stdout_eq("x=[1, 2]\n");
}

#[test]
fn parse_error_exits_one() {
    let run = cli()
        .args(&["-c", "echo 'unterminated"])
        .fails()
        .stdout_has("error: unterminated string literal");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn dispatch_error_exits_one() {
    cli()
        .args(&["-c", "type 1 2"])
        .fails()
        .stdout_eq("error: type: takes 1 positional argument(s) but 2 were given\n");
}

#[test]
fn empty_line_is_an_error() {
    cli()
        .args(&["-c", "   "])
        .fails()
        .stdout_eq("error: no valid input was received\n");
}

#[test]
fn exit_succeeds() {
    cli().args(&["-c", "exit"]).passes().stdout_eq("");
}

#[test]
fn stdin_ignored() {
    cli()
        .args(&["-c", "type 1"])
        .stdin("type 'a'\n")
        .passes()
        .stdout_eq("int\n");
}

#[test]
fn max_depth_flag() {
    cli().args(&["--max-depth", "1", "-c", "type [1]"]).passes();
    cli()
        .args(&["--max-depth", "1", "-c", "type [[1]]"])
        .fails()
        .stdout_has("nested deeper than 1 levels");
}

#[test]
fn bad_flag_is_a_usage_error() {
    cli()
        .args(&["--max-depth", "0"])
        .fails()
        .stderr_has("--max-depth");
}

#[test]
fn help_shows_long_text_for_one_command() {
    cli()
        .args(&["-c", "help echo"])
        .passes()
        .stdout_has("| names: echo\nValues are printed in literal form");
}

#[test]
fn quit_is_exit() {
    cli()
        .args(&["-c", "quit"])
        .stdin("type 1\n")
        .passes()
        .stdout_eq("");
}

#[test]
fn float_overflow_is_reported() {
    let line = format!("echo {}.", "9".repeat(400));
    cli()
        .args(&["-o", "json", "-c", &line])
        .fails()
        .stdout_has("\"error\":\"float literal out of range at position 5\"");
}
