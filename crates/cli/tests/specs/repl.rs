//! Line loop specs
//!
//! Lines arrive on stdin; errors are reported and the loop keeps going.

use crate::prelude::*;

#[test]
fn runs_each_line() {
    cli()
        .stdin("echo 1 'two' [3]\ntype {a: 1}\n")
        .passes()
        .stdout_eq("1 'two' [3]\ndict\n")
        .stderr_empty();
}

#[test]
fn no_prompt_when_stdin_is_not_a_terminal() {
    cli().stdin("type 1\n").passes().stdout_lacks(">>>");
}

#[test]
fn blank_lines_are_skipped() {
    cli()
        .stdin("\n   \ntype 1\n\n")
        .passes()
        .stdout_eq("int\n");
}

#[test]
fn errors_do_not_stop_the_loop() {
    cli()
        .stdin("echo a=1 2\ntype 'ok'\n")
        .passes()
        .stdout_eq(
            "error: positional argument follows keyword argument at position 9\n\
             echo a=1 2\n\
             \x20        ^\n\
             str\n",
        )
        .stderr_empty();
}

#[test]
fn unknown_command_points_at_name() {
    cli()
        .stdin("  launch now\n")
        .passes()
        .stdout_eq("error: launch is not a command\n  launch now\n  ^^^^^^\n");
}

#[test]
fn exit_stops_reading() {
    cli()
        .stdin("type 1\nexit\ntype 2\n")
        .passes()
        .stdout_eq("int\n");
}

#[test]
fn help_lists_commands() {
    cli()
        .stdin("help\n")
        .passes()
        .stdout_has("List of available commands:")
        .stdout_has("| echo: prints its arguments back as literals")
        .stdout_has("| type: prints the type of a value\n| <value>");
}

#[test]
fn names_lists_aliases() {
    cli()
        .stdin("aliases info\n")
        .passes()
        .stdout_eq("Registered aliases for info\nhelp, info\n");
}

#[test]
fn json_output() {
    cli()
        .args(&["-o", "json"])
        .stdin("type 1.5\nnope\n")
        .passes()
        .stdout_eq(
            "{\"command\":\"type\",\"result\":\"float\"}\n\
             {\"error\":\"nope is not a command\",\"span\":[0,4]}\n",
        );
}

#[test]
fn tokens_flag() {
    cli()
        .args(&["--tokens"])
        .stdin("f(x, 'y')\n")
        .passes()
        .stdout_eq(
            "Identifier \"f\" 0..1\n\
             OpenParen \"(\" 1..2\n\
             Identifier \"x\" 2..3\n\
             Comma \",\" 3..4\n\
             StringLiteral \"y\" 5..8\n\
             CloseParen \")\" 8..9\n",
        );
}

#[test]
fn logs_go_to_stderr() {
    cli()
        .env("CMDL_LOG", "debug")
        .stdin("type 1\n")
        .passes()
        .stdout_eq("int\n")
        .stderr_has("dispatching");
}
